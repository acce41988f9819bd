//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, diagnostics};
use crate::state::AppState;

/// Category routes mounted at `/api/categorias`.
///
/// ```text
/// GET    /                    -> list_categories
/// POST   /                    -> create_category
/// GET    /produtos            -> list_categories_with_products
/// GET    /teste               -> probe
/// GET    /autor               -> author
/// GET    /saudacao/{nome}     -> greeting
/// GET    /{id}                -> get_category
/// PUT    /{id}                -> update_category
/// DELETE /{id}                -> delete_category
/// GET    /{id}/produtos       -> list_category_products
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/produtos", get(categories::list_categories_with_products))
        .route("/teste", get(diagnostics::probe))
        .route("/autor", get(diagnostics::author))
        .route("/saudacao/{nome}", get(diagnostics::greeting))
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/{id}/produtos", get(categories::list_category_products))
}
