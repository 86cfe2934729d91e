//! Source-catalog loading.

use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Property},
    Catalog,
};

/// Error of loading a [`Catalog`] from its source.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Source JSON failed to parse.
    #[display("failed to parse source JSON: {_0}")]
    Parse(serde_json::Error),

    /// Two records share the same id.
    #[display("duplicate property id: `{_0}`")]
    DuplicateId(#[error(not(source))] property::Id),

    /// Two records share the same slug.
    #[display("duplicate property slug: `{_0}`")]
    DuplicateSlug(#[error(not(source))] property::Slug),
}

impl Catalog {
    /// Loads a [`Catalog`] from the provided JSON string: an array of
    /// property records in the agreed source shape.
    ///
    /// The shape is deliberately lenient: missing descriptive fields fall
    /// back to their documented defaults, unknown status and classification
    /// values pass through, and the dual-shape fields (`area`, `height`,
    /// `documents`, `priceRange`) accept every form the source uses.
    ///
    /// # Errors
    ///
    /// Errors if the JSON fails to parse, or the parsed records violate
    /// catalog invariants (duplicate id or slug).
    pub fn from_json_str(json: &str) -> Result<Self, Traced<Error>> {
        let records: Vec<Property> = serde_json::from_str(json)
            .map_err(Error::Parse)
            .map_err(|e| tracerr::new!(e))?;

        log::debug!("parsed {} source records", records.len());

        Self::new(records)
    }
}

#[cfg(test)]
mod spec {
    use crate::Catalog;

    use super::Error;

    #[test]
    fn accepts_every_source_shape() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": "p-1", "name": "Aster Grove", "type": "residential",
                 "status": "UPCOMING", "area": 1250.5,
                 "priceRange": 4500000},
                {"id": "p-2", "name": "Basil Court", "type": "commercial",
                 "area": {"value": 980, "unit": "sq.ft."},
                 "priceRange": {"min": 4500000, "max": 8000000},
                 "documents": {"brochure": "/docs/basil.pdf"}},
                {"id": "i-1", "slug": "harbor-yield-fund",
                 "name": "Harbor Yield Fund", "type": "investment",
                 "subType": "Warehousing", "rentalYield": 12.5,
                 "documents": [
                    {"name": "Term Sheet", "pdfPath": "/docs/terms.pdf"}
                 ]}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.investments().len(), 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::from_json_str(
            r#"[
                {"id": "p-1", "name": "Aster Grove"},
                {"id": "p-1", "name": "Basil Court"}
            ]"#,
        );

        assert!(matches!(
            result.unwrap_err().as_ref(),
            Error::DuplicateId(_),
        ));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let result = Catalog::from_json_str(
            r#"[
                {"id": "p-1", "slug": "aster-grove", "name": "Aster Grove"},
                {"id": "p-2", "slug": "aster-grove", "name": "Aster Clone"}
            ]"#,
        );

        assert!(matches!(
            result.unwrap_err().as_ref(),
            Error::DuplicateSlug(_),
        ));
    }

    #[test]
    fn malformed_json_fails_to_parse() {
        assert!(matches!(
            Catalog::from_json_str("not json").unwrap_err().as_ref(),
            Error::Parse(_),
        ));
    }
}
