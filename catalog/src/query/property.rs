//! [`Query`] collection related to a single [`Property`].

use common::operations::{By, Select};

use crate::{
    domain::{property, Property},
    Catalog,
};

use super::{CatalogQuery, Query};

/// Queries a [`Property`] by its [`property::Id`].
pub type ById = CatalogQuery<By<Option<Property>, property::Id>>;

/// Queries a [`Property`] by its [`property::Slug`]; the investment-detail
/// routing lookup.
pub type BySlug = CatalogQuery<By<Option<Property>, property::Slug>>;

impl Query<Select<By<Option<Property>, property::Id>>> for Catalog {
    type Ok = Option<Property>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Self::Ok {
        self.get(&by.into_inner()).cloned()
    }
}

impl Query<Select<By<Option<Property>, property::Slug>>> for Catalog {
    type Ok = Option<Property>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Slug>>,
    ) -> Self::Ok {
        self.by_slug(by.into_inner().as_ref()).cloned()
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use crate::{domain::property, Catalog, Query as _};

    use super::{ById, BySlug};

    const STORE: &str = r#"[
        {"id": "i-1", "slug": "harbor-yield-fund", "name": "Harbor Yield Fund",
         "type": "investment"},
        {"id": "p-1", "name": "Aster Grove", "type": "residential"}
    ]"#;

    #[test]
    fn finds_record_by_slug() {
        let catalog = Catalog::from_json_str(STORE).unwrap();
        let slug = property::Slug::from_str("harbor-yield-fund").unwrap();

        let found = catalog.execute(BySlug::by(slug));
        assert_eq!(
            found.map(|p| p.id),
            Some(property::Id::new("i-1")),
        );
    }

    #[test]
    fn unknown_slug_finds_nothing() {
        let catalog = Catalog::from_json_str(STORE).unwrap();
        let slug = property::Slug::from_str("no-such-project").unwrap();

        assert_eq!(catalog.execute(BySlug::by(slug)), None);
    }

    #[test]
    fn finds_record_by_id() {
        let catalog = Catalog::from_json_str(STORE).unwrap();

        let found = catalog.execute(ById::by(property::Id::new("p-1")));
        assert_eq!(
            found.map(|p| p.name.to_string()),
            Some("Aster Grove".to_owned()),
        );
    }
}
