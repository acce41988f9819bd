//! Diagnostic endpoints under `/api/categorias`.

use axum::extract::{Path, State};

use crate::middleware::auth::AuthUser;
use crate::services::greeter::Greeter;
use crate::state::AppState;

/// GET /api/categorias/teste
///
/// Anonymous liveness probe returning the current date.
pub async fn probe() -> String {
    format!(
        "Categorias - {}",
        chrono::Local::now().format("%A, %d %B %Y")
    )
}

/// GET /api/categorias/autor
///
/// The configured author of the catalog.
pub async fn author(_auth: AuthUser, State(state): State<AppState>) -> String {
    format!("Autor : {}", state.config.author)
}

/// GET /api/categorias/saudacao/{nome}
///
/// Greeting produced by the configured [`Greeter`](crate::services::greeter::Greeter).
pub async fn greeting(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> String {
    state.greeter.greet(&name)
}
