use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use books_query::config::CONFIG;
use books_query::setup::{self, SetupResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup::init_tracing(&CONFIG);
    let SetupResult { store } = setup::setup_all();

    let app = books_query::app(store);

    let addr = CONFIG.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("Server ready at http://{}", addr);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
