//! [`Query`] definition.

pub mod properties;
pub mod property;

use common::operations::{By, Select};

use crate::Catalog;

pub use self::properties::StatusGroup;

/// [`Query`] of a [`Catalog`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Catalog`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct CatalogQuery<T>(T);

impl<W, B> CatalogQuery<By<W, B>> {
    /// Creates a new [`CatalogQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<W, B> Query<CatalogQuery<By<W, B>>> for Catalog
where
    Catalog: Query<Select<By<W, B>>, Ok = W>,
{
    type Ok = W;

    fn execute(&self, CatalogQuery(by): CatalogQuery<By<W, B>>) -> Self::Ok {
        self.execute(Select(by))
    }
}
