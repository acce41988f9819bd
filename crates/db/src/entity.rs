//! The [`Entity`] trait and the staged-change types the unit of work
//! collects before commit.

use catalog_core::types::DbId;

use crate::models::category::Category;
use crate::models::product::Product;

/// A pending modification of one entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<E> {
    Add(E),
    Update(E),
    Delete(E),
}

impl<E> Change<E> {
    pub fn entity(&self) -> &E {
        match self {
            Change::Add(e) | Change::Update(e) | Change::Delete(e) => e,
        }
    }
}

/// A change to any catalog entity, kept in staging order.
#[derive(Debug, Clone, PartialEq)]
pub enum StagedChange {
    Category(Change<Category>),
    Product(Change<Product>),
}

/// A persisted catalog record that repositories can stage changes for.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name used in errors and logs.
    const NAME: &'static str;

    fn id(&self) -> DbId;

    /// Wrap a typed change into the heterogeneous staging list.
    fn stage(change: Change<Self>) -> StagedChange;

    /// Recover a typed change, if `change` concerns this entity type.
    fn unstage(change: &StagedChange) -> Option<&Change<Self>>;
}

impl Entity for Category {
    const NAME: &'static str = "Category";

    fn id(&self) -> DbId {
        self.id
    }

    fn stage(change: Change<Self>) -> StagedChange {
        StagedChange::Category(change)
    }

    fn unstage(change: &StagedChange) -> Option<&Change<Self>> {
        match change {
            StagedChange::Category(c) => Some(c),
            StagedChange::Product(_) => None,
        }
    }
}

impl Entity for Product {
    const NAME: &'static str = "Product";

    fn id(&self) -> DbId {
        self.id
    }

    fn stage(change: Change<Self>) -> StagedChange {
        StagedChange::Product(change)
    }

    fn unstage(change: &StagedChange) -> Option<&Change<Self>> {
        match change {
            StagedChange::Product(c) => Some(c),
            StagedChange::Category(_) => None,
        }
    }
}
