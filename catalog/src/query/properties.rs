//! [`Query`] collection related to multiple [`Property`] records.

use common::operations::{By, Select};
use strum::{Display, EnumString};

use crate::{
    domain::{Property, Status},
    Catalog,
};

use super::{CatalogQuery, Query};

/// Queries the list of [`Property`] records belonging to a [`StatusGroup`].
pub type ListByStatusGroup = CatalogQuery<By<Vec<Property>, StatusGroup>>;

/// Queries the list of [`Property`] records matching a [`KindFilter`].
pub type ListByKind = CatalogQuery<By<Vec<Property>, KindFilter>>;

/// Queries the list of investment offerings.
pub type ListInvestments = CatalogQuery<By<Vec<Property>, Investments>>;

/// Standard grouping of [`Property`] records by their [`Status`].
///
/// Groups are independent, non-exclusive predicate filters over the parsed
/// [`Status`] value: dirty data matching several predicates lands in every
/// matching group, and rendered labels are never consulted. Investment
/// offerings are excluded from every group.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
pub enum StatusGroup {
    /// Every non-investment record.
    #[default]
    All,

    /// Records with an upcoming [`Status`].
    Upcoming,

    /// Records under active construction or nearing possession.
    Ongoing,

    /// Records that are completed or ready to move in.
    Completed,
}

impl StatusGroup {
    /// Indicates whether the provided [`Property`] belongs to this
    /// [`StatusGroup`].
    #[must_use]
    pub fn matches(self, property: &Property) -> bool {
        if property.is_investment() {
            return false;
        }
        let status = property.status.as_ref();
        match self {
            Self::All => true,
            Self::Upcoming => status.is_some_and(Status::is_upcoming),
            Self::Ongoing => status.is_some_and(Status::is_ongoing),
            Self::Completed => status.is_some_and(Status::is_completed),
        }
    }
}

/// Case-insensitive filter by the raw classification name of a [`Property`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KindFilter(pub String);

/// Marker selecting investment offerings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Investments;

impl Query<Select<By<Vec<Property>, StatusGroup>>> for Catalog {
    type Ok = Vec<Property>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, StatusGroup>>,
    ) -> Self::Ok {
        self.by_status_group(by.into_inner())
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Query<Select<By<Vec<Property>, KindFilter>>> for Catalog {
    type Ok = Vec<Property>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, KindFilter>>,
    ) -> Self::Ok {
        let KindFilter(name) = by.into_inner();
        self.by_kind(&name).into_iter().cloned().collect()
    }
}

impl Query<Select<By<Vec<Property>, Investments>>> for Catalog {
    type Ok = Vec<Property>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, Investments>>,
    ) -> Self::Ok {
        let Investments = by.into_inner();
        self.investments().into_iter().cloned().collect()
    }
}
