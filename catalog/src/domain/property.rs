//! [`Property`] definitions.

use std::{str::FromStr, sync::LazyLock};

use common::{money::Currency, unit, DateTimeOf, Percent};
use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use common::DateTime;

use crate::domain::{
    measure::Measure,
    media::{self, Documents, Image, Purpose},
    price::PriceRange,
    status, Kind, Status,
};

/// Real-estate project or investment offering of the catalog.
///
/// Records are materialized once from the source catalog and never mutated;
/// every derived category is a pure function of [`Property::status`] and
/// [`Property::kind`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// ID of this [`Property`], unique across the catalog.
    pub id: Id,

    /// URL-safe identifier of this [`Property`], unique when present; used
    /// for investment-detail routing.
    #[serde(default)]
    pub slug: Option<Slug>,

    /// Display name of this [`Property`].
    pub name: Name,

    /// Construction [`Status`] of this [`Property`], if known.
    #[serde(default, deserialize_with = "status::opt_lenient")]
    pub status: Option<Status>,

    /// Classification of this [`Property`], if known.
    #[serde(default, rename = "type")]
    pub kind: Option<Kind>,

    /// Secondary free-text classifier, populated mainly for investment
    /// offerings.
    #[serde(default, rename = "subType")]
    pub sub_kind: Option<String>,

    /// [`Location`] of this [`Property`].
    #[serde(default)]
    pub location: Location,

    /// [`PriceRange`] of this [`Property`].
    #[serde(default)]
    pub price_range: PriceRange,

    /// [`Currency`] the prices of this [`Property`] are denominated in.
    #[serde(default = "default_currency")]
    pub currency: Currency,

    /// Carpet area of this [`Property`].
    #[serde(default)]
    pub area: Option<Measure>,

    /// Height of this [`Property`].
    #[serde(default)]
    pub height: Option<Measure>,

    /// Ordered unit-type descriptors of this [`Property`]; empty for
    /// non-residential and investment records.
    #[serde(default)]
    pub flat_types: Vec<FlatType>,

    /// [`Documents`] of this [`Property`].
    #[serde(default)]
    pub documents: Documents,

    /// [`Image`]s of this [`Property`], tagged by [`Purpose`].
    #[serde(default)]
    pub images: Vec<Image>,

    /// Construction completion percentage of this [`Property`].
    #[serde(default)]
    pub completion_percentage: Option<Percent>,

    /// [`DateTime`] of the planned possession handover, if announced.
    #[serde(default, with = "common::datetime::serde::rfc3339::option")]
    pub possession_date: Option<PossessionDateTime>,

    /// Total number of units in this [`Property`].
    #[serde(default)]
    pub total_units: Option<TotalUnits>,

    /// Amenity names of this [`Property`].
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Project overview text of this [`Property`].
    #[serde(default)]
    pub project_overview: Option<String>,

    /// Full description of this [`Property`].
    #[serde(default)]
    pub description: Option<String>,

    /// Short description of this [`Property`], used by compact cards.
    #[serde(default)]
    pub short_description: Option<String>,

    /// Expected rental yield of this [`Property`].
    #[serde(default)]
    pub rental_yield: Option<Percent>,

    /// Expected appreciation of this [`Property`].
    #[serde(default)]
    pub expected_appreciation: Option<Percent>,

    /// Sales contact [`ContactPhone`] of this [`Property`].
    #[serde(default)]
    pub contact_phone: Option<ContactPhone>,
}

impl Property {
    /// Indicates whether this [`Property`] is an investment offering.
    ///
    /// Investment offerings are excluded from every standard status
    /// grouping regardless of their [`Status`].
    #[must_use]
    pub fn is_investment(&self) -> bool {
        self.kind.as_ref().is_some_and(Kind::is_investment)
    }

    /// Indicates whether this [`Property`] is completed.
    ///
    /// A caller-asserted [`CategoryHint`] takes precedence over the value
    /// derived from [`Property::status`]: when a hint is given, the derived
    /// value is not consulted at all.
    #[must_use]
    pub fn is_completed(&self, hint: Option<CategoryHint>) -> bool {
        if let Some(hint) = hint {
            return hint == CategoryHint::Completed;
        }
        self.status.as_ref().is_some_and(Status::is_completed)
    }

    /// Indicates whether this [`Property`] is upcoming, subject to the same
    /// [`CategoryHint`] rule as [`Property::is_completed`].
    #[must_use]
    pub fn is_upcoming(&self, hint: Option<CategoryHint>) -> bool {
        if let Some(hint) = hint {
            return hint == CategoryHint::Upcoming;
        }
        self.status.as_ref().is_some_and(Status::is_upcoming)
    }

    /// Returns the URL of the image registered under the provided
    /// [`Purpose`].
    ///
    /// Falls back to the first image of the record, then to
    /// [`media::PLACEHOLDER_IMAGE`]; never empty.
    #[must_use]
    pub fn display_image(&self, purpose: Purpose) -> &str {
        self.images
            .iter()
            .find(|i| i.purpose == purpose)
            .or_else(|| self.images.first())
            .map_or(media::PLACEHOLDER_IMAGE, |i| i.url.as_str())
    }
}

/// Caller-asserted category of a [`Property`], taking precedence over the
/// one derived from its [`Status`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CategoryHint {
    /// The page already knows the record belongs to the completed bucket.
    Completed,

    /// The page already knows the record belongs to the upcoming bucket.
    Upcoming,
}

/// ID of a [`Property`].
///
/// Opaque, assigned by the source catalog and stable for its lifetime.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`] from the provided value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// URL-safe identifier of a [`Property`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Creates a new [`Slug`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `slug` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Creates a new [`Slug`] if the given `slug` is valid.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        Self::check(&slug).then_some(Self(slug))
    }

    /// Checks whether the given `slug` is a valid [`Slug`].
    fn check(slug: impl AsRef<str>) -> bool {
        let slug = slug.as_ref();
        !slug.is_empty()
            && slug.len() <= 512
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl FromStr for Slug {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Slug`")
    }
}

/// Display name of a [`Property`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Location of a [`Property`]; every part is optional.
#[derive(
    Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,

    /// City name.
    #[serde(default)]
    pub city: Option<String>,

    /// Link to an external map.
    #[serde(default)]
    pub map_link: Option<String>,
}

impl Location {
    /// Returns a single display line of this [`Location`], if it has any
    /// parts.
    #[must_use]
    pub fn line(&self) -> Option<String> {
        match (&self.address, &self.city) {
            (Some(address), Some(city)) => Some(format!("{address}, {city}")),
            (Some(part), None) | (None, Some(part)) => Some(part.clone()),
            (None, None) => None,
        }
    }
}

/// Unit-type descriptor of a [`Property`] (e.g. `"2 BHK"`).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FlatType {
    /// Raw unit-type label.
    #[serde(rename = "type")]
    pub label: String,
}

/// Total number of units in a [`Property`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct TotalUnits(u32);

/// Sales contact phone number of a [`Property`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct ContactPhone(String);

impl ContactPhone {
    /// Creates a new [`ContactPhone`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `number` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Creates a new [`ContactPhone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`ContactPhone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`ContactPhone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^([+]?\d{1,2}[-\s]?|)\d{3}[-\s]?\d{3}[-\s]?\d{4}$")
                .expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for ContactPhone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ContactPhone`")
    }
}

/// [`DateTime`] of the planned possession handover of a [`Property`].
pub type PossessionDateTime = DateTimeOf<(Property, unit::Possession)>;

/// Default [`Currency`] of the source catalog.
fn default_currency() -> Currency {
    Currency::Inr
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{CategoryHint, ContactPhone, Kind, Property, Slug, Status};

    fn record(kind: Option<Kind>, status: Option<Status>) -> Property {
        let json = r#"{"id": "p-1", "name": "Test Heights", "type": "residential"}"#;
        let mut property: Property = serde_json::from_str(json).unwrap();
        property.kind = kind;
        property.status = status;
        property
    }

    #[test]
    fn investment_is_derived_from_kind() {
        assert!(record(Some(Kind::Investment), None).is_investment());
        assert!(!record(Some(Kind::Residential), None).is_investment());
        assert!(!record(None, None).is_investment());
    }

    #[test]
    fn completed_is_derived_from_status() {
        assert!(record(None, Some(Status::Completed)).is_completed(None));
        assert!(record(None, Some(Status::ReadyToMoveIn)).is_completed(None));
        assert!(!record(None, Some(Status::Upcoming)).is_completed(None));
        assert!(!record(None, None).is_completed(None));
    }

    #[test]
    fn hint_wins_over_derived_category() {
        let upcoming = record(None, Some(Status::Upcoming));
        assert!(upcoming.is_completed(Some(CategoryHint::Completed)));
        assert!(!upcoming.is_upcoming(Some(CategoryHint::Completed)));

        let completed = record(None, Some(Status::Completed));
        assert!(completed.is_upcoming(Some(CategoryHint::Upcoming)));
        assert!(!completed.is_completed(Some(CategoryHint::Upcoming)));
    }

    #[test]
    fn slug_format() {
        assert!(Slug::from_str("skyline-one").is_ok());
        assert!(Slug::from_str("tower-42").is_ok());
        assert!(Slug::from_str("Skyline One").is_err());
        assert!(Slug::from_str("").is_err());
    }

    #[test]
    fn contact_phone_format() {
        assert!(ContactPhone::from_str("+91 981 234 5678").is_ok());
        assert!(ContactPhone::from_str("9812345678").is_ok());
        assert!(ContactPhone::from_str("call me").is_err());
    }
}
