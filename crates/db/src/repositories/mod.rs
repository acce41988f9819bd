//! Generic repository over any [`Entity`], plus entity-specific queries.
//!
//! Reads go straight to the [`CatalogStore`]. Writes only stage a change in
//! the owning [`UnitOfWork`](crate::UnitOfWork); nothing is persisted until it
//! commits.

mod category_repo;
mod product_repo;

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::pagination::{PageParams, PagedList};
use catalog_core::types::DbId;

use crate::entity::{Change, Entity, StagedChange};
use crate::error::DbResult;
use crate::models::category::Category;
use crate::models::product::Product;
use crate::store::{CatalogStore, EntityStore};

/// CRUD operations available for every catalog entity.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All rows, ordered by id.
    async fn get_all(&self) -> DbResult<Vec<E>>;

    /// One page of rows, ordered by id.
    async fn get_page(&self, params: &PageParams) -> DbResult<PagedList<E>>;

    async fn get_by_id(&self, id: DbId) -> DbResult<Option<E>>;

    /// Stage an insert. The id is generated on commit.
    fn add(&mut self, entity: E);

    /// Stage a full replacement of the row with `entity.id()`.
    fn update(&mut self, entity: E);

    /// Stage removal of the row with `entity.id()`.
    fn delete(&mut self, entity: E);
}

/// Repository handle borrowed from a unit of work.
pub struct Repo<'a, E: Entity> {
    store: &'a Arc<dyn CatalogStore>,
    staged: &'a mut Vec<StagedChange>,
    _entity: PhantomData<E>,
}

pub type CategoryRepository<'a> = Repo<'a, Category>;
pub type ProductRepository<'a> = Repo<'a, Product>;

impl<'a, E: Entity> Repo<'a, E> {
    pub(crate) fn new(store: &'a Arc<dyn CatalogStore>, staged: &'a mut Vec<StagedChange>) -> Self {
        Self {
            store,
            staged,
            _entity: PhantomData,
        }
    }

    fn stage(&mut self, change: Change<E>) {
        tracing::trace!(entity = E::NAME, id = change.entity().id(), "Staging change");
        self.staged.push(E::stage(change));
    }
}

#[async_trait]
impl<'a, E> Repository<E> for Repo<'a, E>
where
    E: Entity,
    dyn CatalogStore: EntityStore<E>,
{
    async fn get_all(&self) -> DbResult<Vec<E>> {
        EntityStore::<E>::fetch_all(&**self.store).await
    }

    async fn get_page(&self, params: &PageParams) -> DbResult<PagedList<E>> {
        EntityStore::<E>::fetch_page(&**self.store, params).await
    }

    async fn get_by_id(&self, id: DbId) -> DbResult<Option<E>> {
        EntityStore::<E>::fetch_by_id(&**self.store, id).await
    }

    fn add(&mut self, entity: E) {
        self.stage(Change::Add(entity));
    }

    fn update(&mut self, entity: E) {
        self.stage(Change::Update(entity));
    }

    fn delete(&mut self, entity: E) {
        self.stage(Change::Delete(entity));
    }
}
