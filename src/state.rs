use std::sync::Arc;

use crate::auth::{self, RequestSignals};
use crate::store::BookStore;
use axum::http::HeaderMap;
use juniper::Context as JuniperContext;

pub type AppState = Arc<AppData>;

/// Build the per-request context from the shared store and request headers.
pub fn context_from_headers(state: &AppData, headers: &HeaderMap) -> AppData {
    AppData::new(state.store.clone(), auth::extract_signals_from_headers(headers))
}

#[derive(Clone, Debug)]
pub struct AppData {
    pub store: BookStore,
    pub signals: RequestSignals,
}

impl JuniperContext for AppData {}

impl AppData {
    pub fn new(store: BookStore, signals: RequestSignals) -> Self {
        Self { store, signals }
    }
}
