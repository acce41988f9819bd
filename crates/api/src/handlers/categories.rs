//! Handlers for `/api/categorias`.
//!
//! All endpoints require authentication via [`AuthUser`]. Reads and writes go
//! through a per-request [`UnitOfWork`](catalog_db::UnitOfWork); writes are
//! persisted by a single commit.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::pagination::PageParams;
use catalog_core::types::DbId;
use catalog_db::models::category::Category;
use catalog_db::repositories::Repository;

use super::pagination_header;
use crate::dto::{CategoryDto, ProductDto};
use crate::error::{AppError, AppResult};
use crate::extract::{AppQuery, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Base path used to build `Location` headers.
const BASE_PATH: &str = "/api/categorias";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/categorias?pageNumber=&pageSize=
///
/// One page of categories ordered by id; page metadata in `X-Pagination`.
pub async fn list_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();

    let page = uow.categories().get_page(&params).await?;
    let headers = pagination_header(&page)?;
    let items: Vec<CategoryDto> = page.items.into_iter().map(CategoryDto::from).collect();

    Ok((headers, Json(items)))
}

/// GET /api/categorias/produtos
///
/// Every category with its products.
pub async fn list_categories_with_products(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    let categories = uow.categories().get_with_products().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(CategoryDto::from).collect();
    Ok(Json(dtos))
}

/// GET /api/categorias/{id}
pub async fn get_category(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    let category = uow.categories().get_by_id(id).await?.ok_or_else(|| {
        tracing::info!(id, "Category not found");
        not_found(id)
    })?;

    Ok(Json(CategoryDto::from(category)))
}

/// GET /api/categorias/{id}/produtos
///
/// Products of one category; 404 when the category does not exist.
pub async fn list_category_products(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    if uow.categories().get_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }

    let products = uow.products().get_by_category(id).await?;
    let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
    Ok(Json(dtos))
}

/// POST /api/categorias
///
/// Any id in the body is ignored; the store assigns one. Responds 201 with a
/// `Location` header pointing at the new resource.
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CategoryDto>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    uow.categories().add(Category {
        id: 0,
        ..Category::from(input)
    });

    let committed = uow.commit().await?;
    let created = committed
        .first_added::<Category>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("Commit returned no category".into()))?;

    tracing::info!(id = created.id, subject = %auth.subject, "Category created");

    let location = format!("{BASE_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(CategoryDto::from(created)),
    ))
}

/// PUT /api/categorias/{id}
///
/// Replaces every mapped field. The body id must equal the path id (400
/// otherwise, nothing staged); a nonexistent id yields 404.
pub async fn update_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CategoryDto>,
) -> AppResult<impl IntoResponse> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Path id {id} does not match body categoriaId {}",
            input.id
        )));
    }

    let mut uow = state.unit_of_work();
    if uow.categories().get_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }

    let category = Category::from(input);
    uow.categories().update(category.clone());
    uow.commit().await?;

    tracing::info!(id, subject = %auth.subject, "Category updated");

    Ok(Json(CategoryDto::from(category)))
}

/// DELETE /api/categorias/{id}
///
/// Responds with the deleted category. Its products are removed with it.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    let category = uow
        .categories()
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    uow.categories().delete(category.clone());
    uow.commit().await?;

    tracing::info!(id, subject = %auth.subject, "Category deleted");

    Ok(Json(CategoryDto::from(category)))
}
