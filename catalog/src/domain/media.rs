//! Image and document definitions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[cfg(doc)]
use crate::domain::Property;

/// Fallback image used when a [`Property`] has no image of the requested
/// [`Purpose`].
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-property.jpg";

/// Purpose an [`Image`] is registered under.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Purpose {
    /// Exterior shot, the primary card image.
    Exterior,

    /// Interior shot.
    Interior,

    /// Floor plan drawing.
    FloorPlan,

    /// Master plan drawing.
    MasterPlan,

    /// Location map.
    LocationMap,

    /// Generic gallery shot.
    Gallery,
}

/// Image reference of a [`Property`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Image {
    /// [`Purpose`] this image is registered under.
    pub purpose: Purpose,

    /// URL of the image.
    pub url: String,
}

/// Reference to a downloadable document of a [`Property`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRef {
    /// Display name of the document.
    pub name: String,

    /// Path to the PDF file.
    pub pdf_path: String,
}

/// Documents of a [`Property`].
///
/// The source catalog uses two incompatible shapes for the same concept: a
/// list of [`DocRef`]s (investment records) or a map with a single
/// `brochure` path. Both are accepted and normalized into a uniform list
/// only at the view-model boundary; nothing below it branches on shape.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Documents {
    /// Explicit list of documents.
    List(Vec<DocRef>),

    /// A single brochure path.
    Brochure {
        /// Path to the brochure PDF.
        brochure: String,
    },
}

impl Documents {
    /// Display name a bare brochure is normalized under.
    const BROCHURE_NAME: &'static str = "Brochure";

    /// Normalizes this [`Documents`] into a uniform list of [`DocRef`]s.
    #[must_use]
    pub fn normalized(&self) -> Vec<DocRef> {
        match self {
            Self::List(docs) => docs.clone(),
            Self::Brochure { brochure } => vec![DocRef {
                name: Self::BROCHURE_NAME.to_owned(),
                pdf_path: brochure.clone(),
            }],
        }
    }
}

impl Default for Documents {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[cfg(test)]
mod spec {
    use super::{DocRef, Documents};

    #[test]
    fn both_source_shapes_normalize_identically() {
        let list: Documents = serde_json::from_str(
            r#"[{"name": "Brochure", "pdfPath": "/docs/brochure.pdf"}]"#,
        )
        .unwrap();
        let map: Documents =
            serde_json::from_str(r#"{"brochure": "/docs/brochure.pdf"}"#)
                .unwrap();

        let expected = vec![DocRef {
            name: "Brochure".to_owned(),
            pdf_path: "/docs/brochure.pdf".to_owned(),
        }];
        assert_eq!(list.normalized(), expected);
        assert_eq!(map.normalized(), expected);
    }

    #[test]
    fn missing_documents_normalize_empty() {
        assert_eq!(Documents::default().normalized(), Vec::<DocRef>::new());
    }
}
