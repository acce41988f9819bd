pub mod categories;
pub mod graphql;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categorias                          list (paginated), create
/// /categorias/produtos                 categories with products
/// /categorias/teste                    diagnostic probe (public)
/// /categorias/autor                    configured author
/// /categorias/saudacao/{nome}          greeting
/// /categorias/{id}                     get, update, delete
/// /categorias/{id}/produtos            products of one category
///
/// /produtos                            list (paginated), create
/// /produtos/menorpreco                 products by ascending price
/// /produtos/{id}                       get, update, delete
/// ```
///
/// Everything except `/categorias/teste` requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categorias", categories::router())
        .nest("/produtos", products::router())
}
