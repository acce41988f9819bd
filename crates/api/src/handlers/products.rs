//! Handlers for `/api/produtos`.
//!
//! Same contract as the category endpoints. A product must reference an
//! existing category; a dangling `categoriaId` is rejected with 400 at commit.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::pagination::PageParams;
use catalog_core::types::DbId;
use catalog_db::models::product::Product;
use catalog_db::repositories::Repository;

use super::pagination_header;
use crate::dto::ProductDto;
use crate::error::{AppError, AppResult};
use crate::extract::{AppQuery, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const BASE_PATH: &str = "/api/produtos";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// GET /api/produtos?pageNumber=&pageSize=
pub async fn list_products(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();

    let page = uow.products().get_page(&params).await?;
    let headers = pagination_header(&page)?;
    let items: Vec<ProductDto> = page.items.into_iter().map(ProductDto::from).collect();

    Ok((headers, Json(items)))
}

/// GET /api/produtos/menorpreco
///
/// All products, cheapest first.
pub async fn list_products_by_price(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    let products = uow.products().get_by_lowest_price().await?;

    let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
    Ok(Json(dtos))
}

/// GET /api/produtos/{id}
pub async fn get_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    let product = uow
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ProductDto::from(product)))
}

/// POST /api/produtos
pub async fn create_product(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    uow.products().add(Product {
        id: 0,
        ..Product::from(input)
    });

    let committed = uow.commit().await?;
    let created = committed
        .first_added::<Product>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("Commit returned no product".into()))?;

    tracing::info!(
        id = created.id,
        category_id = created.category_id,
        subject = %auth.subject,
        "Product created"
    );

    let location = format!("{BASE_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(ProductDto::from(created)),
    ))
}

/// PUT /api/produtos/{id}
pub async fn update_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> AppResult<impl IntoResponse> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Path id {id} does not match body produtoId {}",
            input.id
        )));
    }

    let mut uow = state.unit_of_work();
    let existing = uow
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    // A PUT without a registration date keeps the stored one.
    let registered_at = input.registered_at.unwrap_or(existing.registered_at);
    let product = Product {
        registered_at,
        ..Product::from(input)
    };
    uow.products().update(product.clone());
    uow.commit().await?;

    tracing::info!(id, subject = %auth.subject, "Product updated");

    Ok(Json(ProductDto::from(product)))
}

/// DELETE /api/produtos/{id}
pub async fn delete_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut uow = state.unit_of_work();
    let product = uow
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    uow.products().delete(product.clone());
    uow.commit().await?;

    tracing::info!(id, subject = %auth.subject, "Product deleted");

    Ok(Json(ProductDto::from(product)))
}
