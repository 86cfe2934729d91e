//! [`Property`]-related read definitions.

use common::Percent;
use itertools::Itertools as _;

use crate::domain::{
    media::{DocRef, Purpose},
    property::{CategoryHint, FlatType},
    status::StatusDisplay,
    Property, Status,
};

/// Page-supplied flags shaping a [`Card`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Hints {
    /// The page already knows the record belongs to the completed bucket.
    pub completed: bool,

    /// The page already knows the record belongs to the upcoming bucket.
    pub upcoming: bool,

    /// Render the compact card variant.
    pub compact: bool,
}

impl Hints {
    /// Converts these [`Hints`] into a [`CategoryHint`], if any.
    ///
    /// `completed` wins when both bucket flags are set.
    #[must_use]
    pub fn category(self) -> Option<CategoryHint> {
        if self.completed {
            Some(CategoryHint::Completed)
        } else if self.upcoming {
            Some(CategoryHint::Upcoming)
        } else {
            None
        }
    }
}

/// Display-ready projection of a [`Property`] consumed by card renderers.
#[derive(Clone, Debug)]
pub struct Card {
    /// Display name of the record.
    pub name: String,

    /// URL-safe identifier of the record, for detail routing.
    pub slug: Option<String>,

    /// Single location line, if the record has one.
    pub location: Option<String>,

    /// Resolved [`Status`] display descriptor.
    pub status: StatusDisplay,

    /// Resolved price string; never empty.
    pub price: String,

    /// Resolved primary image URL; never empty.
    pub image: String,

    /// Unit-type summary (`"2 & 3 BHK"`), if the record has unit types.
    pub unit_summary: Option<String>,

    /// Documents of the record, normalized to a uniform list regardless of
    /// the source shape.
    pub documents: Vec<DocRef>,

    /// Description text matching the card variant.
    pub blurb: Option<String>,

    /// Whether the record renders as completed, honoring page hints.
    pub completed: bool,

    /// Whether the record renders as upcoming, honoring page hints.
    pub upcoming: bool,

    /// Whether the compact card variant was requested.
    pub compact: bool,

    /// Construction completion percentage, if known.
    pub completion: Option<Percent>,

    /// Possession handover month (`"December 2025"`), if announced.
    pub possession: Option<String>,

    /// Total number of units, if known.
    pub total_units: Option<u32>,
}

impl Card {
    /// Shapes the provided record into a [`Card`].
    ///
    /// An absent record short-circuits to [`None`]: render nothing, not an
    /// error, so card renderers stay safe to invoke with unknown data while
    /// the catalog is still being assembled.
    #[must_use]
    pub fn new(record: Option<&Property>, hints: Hints) -> Option<Self> {
        let record = record?;
        let hint = hints.category();

        Some(Self {
            name: record.name.to_string(),
            slug: record.slug.as_ref().map(ToString::to_string),
            location: record.location.line(),
            status: Status::display_opt(record.status.as_ref()),
            price: record.price_range.display(record.currency),
            image: record.display_image(Purpose::Exterior).to_owned(),
            unit_summary: unit_summary(&record.flat_types),
            documents: record.documents.normalized(),
            blurb: if hints.compact {
                record.short_description.clone()
            } else {
                record
                    .description
                    .clone()
                    .or_else(|| record.short_description.clone())
            },
            completed: record.is_completed(hint),
            upcoming: record.is_upcoming(hint),
            compact: hints.compact,
            completion: record.completion_percentage,
            possession: record.possession_date.map(|d| d.month_year()),
            total_units: record.total_units.map(Into::into),
        })
    }
}

/// Builds the unit-type summary of a card.
///
/// The `" BHK"` suffix is stripped from every entry, the remainders are
/// joined with `" & "`, and the suffix is re-appended once:
/// `["2 BHK", "3 BHK"]` becomes `"2 & 3 BHK"`.
#[must_use]
pub fn unit_summary(flat_types: &[FlatType]) -> Option<String> {
    if flat_types.is_empty() {
        return None;
    }

    let joined = flat_types
        .iter()
        .map(|ft| ft.label.strip_suffix(" BHK").unwrap_or(&ft.label))
        .join(" & ");
    Some(format!("{joined} BHK"))
}

#[cfg(test)]
mod spec {
    use crate::domain::{media, property::FlatType, Property};

    use super::{unit_summary, Card, Hints};

    fn flat_types(labels: &[&str]) -> Vec<FlatType> {
        labels
            .iter()
            .map(|label| FlatType {
                label: (*label).to_owned(),
            })
            .collect()
    }

    fn record(json: &str) -> Property {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn absent_record_renders_nothing() {
        assert!(Card::new(None, Hints::default()).is_none());
    }

    #[test]
    fn summarizes_unit_types() {
        assert_eq!(
            unit_summary(&flat_types(&["2 BHK", "3 BHK"])).as_deref(),
            Some("2 & 3 BHK"),
        );
        assert_eq!(
            unit_summary(&flat_types(&["3 BHK"])).as_deref(),
            Some("3 BHK"),
        );
        assert_eq!(
            unit_summary(&flat_types(&["2 BHK", "3 BHK", "4 BHK"])).as_deref(),
            Some("2 & 3 & 4 BHK"),
        );
        assert_eq!(unit_summary(&[]), None);
    }

    #[test]
    fn resolves_fallbacks_for_sparse_records() {
        let sparse = record(r#"{"id": "p-1", "name": "Aster Grove"}"#);
        let card = Card::new(Some(&sparse), Hints::default()).unwrap();

        assert_eq!(card.status.label, "N/A");
        assert_eq!(card.price, "Price on Request");
        assert_eq!(card.image, media::PLACEHOLDER_IMAGE);
        assert_eq!(card.unit_summary, None);
        assert_eq!(card.documents, Vec::new());
    }

    #[test]
    fn resolves_display_fields() {
        let full = record(
            r#"{
                "id": "p-2",
                "slug": "basil-court",
                "name": "Basil Court",
                "type": "residential",
                "status": "UNDER_CONSTRUCTION",
                "location": {"address": "12 Lake Rd", "city": "Pune"},
                "priceRange": {"min": 4500000, "max": 8000000},
                "flatTypes": [{"type": "2 BHK"}, {"type": "3 BHK"}],
                "documents": {"brochure": "/docs/basil.pdf"},
                "images": [
                    {"purpose": "INTERIOR", "url": "/img/basil-int.jpg"},
                    {"purpose": "EXTERIOR", "url": "/img/basil-ext.jpg"}
                ],
                "possessionDate": "2025-12-01T00:00:00Z"
            }"#,
        );
        let card = Card::new(Some(&full), Hints::default()).unwrap();

        assert_eq!(card.name, "Basil Court");
        assert_eq!(card.slug.as_deref(), Some("basil-court"));
        assert_eq!(card.location.as_deref(), Some("12 Lake Rd, Pune"));
        assert_eq!(card.status.label, "Under Construction");
        assert_eq!(card.price, "\u{20b9}45 L \u{2013} \u{20b9}80 L");
        assert_eq!(card.image, "/img/basil-ext.jpg");
        assert_eq!(card.unit_summary.as_deref(), Some("2 & 3 BHK"));
        assert_eq!(card.documents.len(), 1);
        assert_eq!(card.documents[0].pdf_path, "/docs/basil.pdf");
        assert_eq!(card.possession.as_deref(), Some("December 2025"));
        assert!(!card.completed);
        assert!(!card.upcoming);
    }

    #[test]
    fn page_hints_override_derived_category() {
        let upcoming = record(
            r#"{"id": "p-3", "name": "Cedar Crest", "type": "residential",
                "status": "UPCOMING"}"#,
        );

        let hinted = Card::new(
            Some(&upcoming),
            Hints {
                completed: true,
                ..Hints::default()
            },
        )
        .unwrap();
        assert!(hinted.completed);
        assert!(!hinted.upcoming);

        let derived = Card::new(Some(&upcoming), Hints::default()).unwrap();
        assert!(!derived.completed);
        assert!(derived.upcoming);
    }

    #[test]
    fn compact_variant_uses_short_description() {
        let described = record(
            r#"{"id": "p-4", "name": "Dune Vista",
                "description": "A long description.",
                "shortDescription": "Short blurb."}"#,
        );

        let compact = Card::new(
            Some(&described),
            Hints {
                compact: true,
                ..Hints::default()
            },
        )
        .unwrap();
        assert_eq!(compact.blurb.as_deref(), Some("Short blurb."));

        let regular = Card::new(Some(&described), Hints::default()).unwrap();
        assert_eq!(regular.blurb.as_deref(), Some("A long description."));
    }
}
