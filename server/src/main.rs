mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "luxe splash listening");
    axum::serve(listener, app).await?;
    Ok(())
}
