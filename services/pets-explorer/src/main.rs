use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pets_core::{logging, Config};
use pets_explorer::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init_from_config(&config.logging);

    let bind_addr = config.server.bind_addr();
    let state = Arc::new(AppState::new(&config)?);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Pets Explorer listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
