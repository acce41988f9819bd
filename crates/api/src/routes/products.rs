//! Route definitions for products.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes mounted at `/api/produtos`.
///
/// ```text
/// GET    /              -> list_products
/// POST   /              -> create_product
/// GET    /menorpreco    -> list_products_by_price
/// GET    /{id}          -> get_product
/// PUT    /{id}          -> update_product
/// DELETE /{id}          -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/menorpreco", get(products::list_products_by_price))
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
