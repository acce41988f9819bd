//! Unit of work: one staging area shared by all repositories, one commit.

use std::sync::Arc;

use crate::entity::{Change, Entity, StagedChange};
use crate::error::DbResult;
use crate::repositories::{CategoryRepository, ProductRepository, Repo};
use crate::store::CatalogStore;

/// Aggregates the catalog repositories over a single store.
///
/// Create one per request. Repository writes accumulate here until
/// [`UnitOfWork::commit`] applies them atomically.
pub struct UnitOfWork {
    store: Arc<dyn CatalogStore>,
    staged: Vec<StagedChange>,
}

impl UnitOfWork {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            staged: Vec::new(),
        }
    }

    pub fn categories(&mut self) -> CategoryRepository<'_> {
        Repo::new(&self.store, &mut self.staged)
    }

    pub fn products(&mut self) -> ProductRepository<'_> {
        Repo::new(&self.store, &mut self.staged)
    }

    /// Number of changes waiting for commit.
    pub fn pending(&self) -> usize {
        self.staged.len()
    }

    /// Persist every staged change in one atomic step.
    ///
    /// The staging area is emptied whether or not the commit succeeds.
    pub async fn commit(&mut self) -> DbResult<Committed> {
        let changes = std::mem::take(&mut self.staged);
        if changes.is_empty() {
            return Ok(Committed::default());
        }

        let count = changes.len();
        let changes = self.store.apply(changes).await?;
        tracing::debug!(count, "Unit of work committed");
        Ok(Committed { changes })
    }
}

/// Outcome of a successful commit, with generated ids filled in.
#[derive(Debug, Default)]
pub struct Committed {
    changes: Vec<StagedChange>,
}

impl Committed {
    /// Entities of type `E` inserted by this commit, in staging order.
    pub fn added<E: Entity>(&self) -> impl Iterator<Item = &E> + '_ {
        self.changes
            .iter()
            .filter_map(E::unstage)
            .filter_map(|change| match change {
                Change::Add(entity) => Some(entity),
                _ => None,
            })
    }

    /// The first entity of type `E` inserted by this commit.
    pub fn first_added<E: Entity>(&self) -> Option<&E> {
        self.added::<E>().next()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
