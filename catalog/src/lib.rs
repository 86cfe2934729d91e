//! Catalog contains the property classification and filtering core.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod query;
pub mod read;
pub mod source;

use std::collections::HashSet;

use tracerr::Traced;
use tracing as log;

use crate::domain::{property, Property};

pub use self::query::{CatalogQuery, Query, StatusGroup};

/// Immutable property catalog.
///
/// Materialized once from the source data at application start and never
/// mutated afterwards: every query is a pure read preserving source order,
/// so a [`Catalog`] is safe to share between any number of readers.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Records of this [`Catalog`], in source order.
    properties: Vec<Property>,
}

impl Catalog {
    /// Creates a new [`Catalog`] from the provided records.
    ///
    /// # Errors
    ///
    /// Errors if two records share an id, or two records share a slug.
    pub fn new(
        properties: Vec<Property>,
    ) -> Result<Self, Traced<source::Error>> {
        let mut ids = HashSet::with_capacity(properties.len());
        let mut slugs = HashSet::new();
        for p in &properties {
            let id: &str = p.id.as_ref();
            if !ids.insert(id) {
                return Err(tracerr::new!(source::Error::DuplicateId(
                    p.id.clone(),
                )));
            }
            if let Some(slug) = &p.slug {
                let slug_str: &str = slug.as_ref();
                if !slugs.insert(slug_str) {
                    return Err(tracerr::new!(source::Error::DuplicateSlug(
                        slug.clone(),
                    )));
                }
            }
        }

        log::debug!("catalog materialized with {} records", properties.len());

        Ok(Self { properties })
    }

    /// Returns all records of this [`Catalog`], in source order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the record with the provided id, if any.
    #[must_use]
    pub fn get(&self, id: &property::Id) -> Option<&Property> {
        self.properties.iter().find(|p| &p.id == id)
    }

    /// Returns the record with the provided slug, if any.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.slug.as_ref().is_some_and(|s| s.as_ref() == slug))
    }

    /// Returns the records belonging to the provided [`StatusGroup`],
    /// preserving source order.
    ///
    /// Groups are independent predicate filters, not a partition: a record
    /// is included in every group whose predicate it satisfies.
    #[must_use]
    pub fn by_status_group(&self, group: StatusGroup) -> Vec<&Property> {
        let selected = self
            .properties
            .iter()
            .filter(|p| group.matches(p))
            .collect::<Vec<_>>();
        log::debug!("{} of {} records in `{group}`", selected.len(), self.len());
        selected
    }

    /// Returns the records matching the provided classification name
    /// case-insensitively, preserving source order.
    #[must_use]
    pub fn by_kind(&self, name: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.kind.as_ref().is_some_and(|k| k.matches(name)))
            .collect()
    }

    /// Returns the investment offerings of this [`Catalog`], preserving
    /// source order.
    #[must_use]
    pub fn investments(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.is_investment())
            .collect()
    }

    /// Returns the number of records in this [`Catalog`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Indicates whether this [`Catalog`] has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
