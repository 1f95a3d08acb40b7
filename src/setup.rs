use tracing::info;

use crate::config::Config;
use crate::store::BookStore;

pub struct SetupResult {
    pub store: BookStore,
}

pub fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn setup_all() -> SetupResult {
    let store = BookStore::seeded();
    info!(books = store.len(), "book store seeded");
    SetupResult { store }
}
