//! PostgreSQL catalog store.
//!
//! Reads run directly against the pool. [`CatalogStore::apply`] executes all
//! staged changes inside one transaction so a failure rolls everything back.

use async_trait::async_trait;
use catalog_core::pagination::{PageParams, PagedList};
use catalog_core::types::DbId;
use sqlx::PgConnection;

use super::{CatalogStats, CatalogStore, EntityStore};
use crate::entity::{Change, StagedChange};
use crate::error::{DbError, DbResult};
use crate::models::category::{Category, CategoryWithProducts};
use crate::models::product::Product;
use crate::DbPool;

/// Column list for `categorias`, aliased to the model's field names.
const CATEGORY_COLUMNS: &str = "categoria_id AS id, nome AS name, imagem_url AS image_url";

/// Column list for `produtos`, aliased to the model's field names.
const PRODUCT_COLUMNS: &str = "produto_id AS id, nome AS name, descricao AS description, \
     preco AS price, imagem_url AS image_url, estoque AS stock, \
     data_cadastro AS registered_at, categoria_id AS category_id";

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore<Category> for PgCatalogStore {
    async fn fetch_all(&self) -> DbResult<Vec<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categorias ORDER BY categoria_id");
        Ok(sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn fetch_page(&self, params: &PageParams) -> DbResult<PagedList<Category>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categorias")
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categorias ORDER BY categoria_id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Category>(&query)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(PagedList::from_parts(items, total, params))
    }

    async fn fetch_by_id(&self, id: DbId) -> DbResult<Option<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categorias WHERE categoria_id = $1");
        Ok(sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}

#[async_trait]
impl EntityStore<Product> for PgCatalogStore {
    async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM produtos ORDER BY produto_id");
        Ok(sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn fetch_page(&self, params: &PageParams) -> DbResult<PagedList<Product>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM produtos ORDER BY produto_id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Product>(&query)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(PagedList::from_parts(items, total, params))
    }

    async fn fetch_by_id(&self, id: DbId) -> DbResult<Option<Product>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM produtos WHERE produto_id = $1");
        Ok(sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn categories_with_products(&self) -> DbResult<Vec<CategoryWithProducts>> {
        let categories = EntityStore::<Category>::fetch_all(self).await?;
        let products = EntityStore::<Product>::fetch_all(self).await?;
        Ok(group_products(categories, products))
    }

    async fn products_by_category(&self, category_id: DbId) -> DbResult<Vec<Product>> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM produtos WHERE categoria_id = $1 ORDER BY produto_id"
        );
        Ok(sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn products_by_price(&self) -> DbResult<Vec<Product>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM produtos ORDER BY preco, produto_id");
        Ok(sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn apply(&self, changes: Vec<StagedChange>) -> DbResult<Vec<StagedChange>> {
        let mut tx = self.pool.begin().await?;
        let mut applied = Vec::with_capacity(changes.len());

        for change in changes {
            let done = match change {
                StagedChange::Category(c) => {
                    StagedChange::Category(apply_category(&mut *tx, c).await?)
                }
                StagedChange::Product(c) => StagedChange::Product(apply_product(&mut *tx, c).await?),
            };
            applied.push(done);
        }

        tx.commit().await?;
        tracing::debug!(count = applied.len(), "Committed staged changes");
        Ok(applied)
    }

    async fn stats(&self) -> DbResult<CatalogStats> {
        Ok(sqlx::query_as::<_, CatalogStats>(
            "SELECT (SELECT COUNT(*) FROM categorias) AS categories, \
                    (SELECT COUNT(*) FROM produtos) AS products",
        )
        .fetch_one(&self.pool)
        .await?)
    }
}

/// Attach each product to its category, preserving id order on both sides.
pub(crate) fn group_products(
    categories: Vec<Category>,
    products: Vec<Product>,
) -> Vec<CategoryWithProducts> {
    categories
        .into_iter()
        .map(|category| {
            let products = products
                .iter()
                .filter(|p| p.category_id == category.id)
                .cloned()
                .collect();
            CategoryWithProducts { category, products }
        })
        .collect()
}

async fn apply_category(
    conn: &mut PgConnection,
    change: Change<Category>,
) -> DbResult<Change<Category>> {
    match change {
        Change::Add(category) => {
            let query = format!(
                "INSERT INTO categorias (nome, imagem_url) VALUES ($1, $2) \
                 RETURNING {CATEGORY_COLUMNS}"
            );
            let created = sqlx::query_as::<_, Category>(&query)
                .bind(&category.name)
                .bind(&category.image_url)
                .fetch_one(&mut *conn)
                .await?;
            Ok(Change::Add(created))
        }
        Change::Update(category) => {
            let result = sqlx::query(
                "UPDATE categorias SET nome = $2, imagem_url = $3 WHERE categoria_id = $1",
            )
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.image_url)
            .execute(&mut *conn)
            .await?;
            ensure_affected(result.rows_affected(), "Category", category.id)?;
            Ok(Change::Update(category))
        }
        Change::Delete(category) => {
            let result = sqlx::query("DELETE FROM categorias WHERE categoria_id = $1")
                .bind(category.id)
                .execute(&mut *conn)
                .await?;
            ensure_affected(result.rows_affected(), "Category", category.id)?;
            Ok(Change::Delete(category))
        }
    }
}

async fn apply_product(
    conn: &mut PgConnection,
    change: Change<Product>,
) -> DbResult<Change<Product>> {
    match change {
        Change::Add(product) => {
            let query = format!(
                "INSERT INTO produtos \
                 (nome, descricao, preco, imagem_url, estoque, data_cadastro, categoria_id) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 RETURNING {PRODUCT_COLUMNS}"
            );
            let created = sqlx::query_as::<_, Product>(&query)
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(&product.image_url)
                .bind(product.stock)
                .bind(product.registered_at)
                .bind(product.category_id)
                .fetch_one(&mut *conn)
                .await
                .map_err(|e| classify_product_error(e, product.category_id))?;
            Ok(Change::Add(created))
        }
        Change::Update(product) => {
            let result = sqlx::query(
                "UPDATE produtos SET nome = $2, descricao = $3, preco = $4, imagem_url = $5, \
                 estoque = $6, data_cadastro = $7, categoria_id = $8 \
                 WHERE produto_id = $1",
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(product.stock)
            .bind(product.registered_at)
            .bind(product.category_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| classify_product_error(e, product.category_id))?;
            ensure_affected(result.rows_affected(), "Product", product.id)?;
            Ok(Change::Update(product))
        }
        Change::Delete(product) => {
            let result = sqlx::query("DELETE FROM produtos WHERE produto_id = $1")
                .bind(product.id)
                .execute(&mut *conn)
                .await?;
            ensure_affected(result.rows_affected(), "Product", product.id)?;
            Ok(Change::Delete(product))
        }
    }
}

fn ensure_affected(rows: u64, entity: &'static str, id: DbId) -> DbResult<()> {
    if rows == 0 {
        return Err(DbError::MissingRow { entity, id });
    }
    Ok(())
}

/// Map a foreign key violation on `produtos.categoria_id` to [`DbError::ForeignKey`].
fn classify_product_error(err: sqlx::Error, category_id: DbId) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return DbError::ForeignKey {
                entity: "Category",
                id: category_id,
            };
        }
    }
    DbError::Sqlx(err)
}
