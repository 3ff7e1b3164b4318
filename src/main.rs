use log::{error, info};
use trivia_api::config::Config;
use trivia_api::store::QuestionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    pretty_env_logger::init();
    log::info!("Starting trivia api...");

    info!("Connecting to {}", config.database_url);
    let store = QuestionStore::connect(&config.database_url, config.max_connections).await?;
    store.migrate().await?;
    info!("Database ready");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, trivia_api::router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
