use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::{routing::post, Router};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /graphql -- executes a query document against the catalog schema.
async fn graphql_handler(
    _auth: AuthUser,
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Mount the GraphQL endpoint (root-level).
pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", post(graphql_handler))
}
