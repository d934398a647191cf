mod collection;
mod config;
mod docs;
mod error;
mod extract;
mod history;
mod router;
mod state;
#[cfg(test)]
mod test_utils;
mod tokens;

use std::sync::Arc;

use config::Config;
use dotenvy::dotenv;
use router::router;
use state::ServerState;

// One thread: store read-modify-write sequences never interleave in-process.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = Arc::new(ServerState::try_from(&config)?);

    log::info!("Querying {}", state.objkt().endpoint());
    log::info!("Search history -> {}", config.history_file);
    log::info!("Personal collection -> {}", config.collection_file);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server_domain).await?;
    log::info!("Server listening on http://{}", config.server_domain);

    axum::serve(listener, app).await?;

    Ok(())
}
