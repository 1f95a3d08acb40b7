//! GraphQL API over an in-memory list of books.
//!
//! - **Queries**: `books`, `book(bookId)`
//! - **Mutations**: `addBook(payload)`, `updateBook(bookId, payload)`

use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, State},
    http::HeaderMap,
    routing::{MethodFilter, get, on},
};
use juniper_axum::{extract::JuniperRequest, graphiql, playground, response::JuniperResponse};
use tracing::debug;

pub mod auth;
pub mod config;
pub mod error;
pub mod schema;
pub mod setup;
pub mod state;
pub mod store;

use crate::state::{AppData, AppState};
use crate::store::BookStore;

async fn graphql(
    State(state): State<AppState>,
    headers: HeaderMap,
    Extension(schema): Extension<Arc<schema::Schema<'static>>>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    let app_data = state::context_from_headers(&state, &headers);
    debug!(signals = ?app_data.signals, "executing graphql request");
    JuniperResponse(request.execute(&schema, &app_data).await)
}

/// Router serving the GraphQL endpoint at `/` plus GraphiQL and Playground.
pub fn app(store: BookStore) -> Router {
    let app_state: AppState = Arc::new(AppData::new(store, Default::default()));

    Router::new()
        .route("/", on(MethodFilter::GET.or(MethodFilter::POST), graphql))
        .route("/graphiql", get(graphiql("/", None::<&str>)))
        .route("/playground", get(playground("/", None::<&str>)))
        .with_state(app_state)
        .layer(Extension(Arc::new(schema::schema())))
}
