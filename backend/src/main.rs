//! Student records entry-point: loads configuration, initialises logging and
//! runs the HTTP server.

mod server;

use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|err| {
        error!(error = %err, "failed to load configuration");
        std::io::Error::other(format!("failed to load configuration: {err}"))
    })?;
    let config = ServerConfig::from_settings(&settings)?;

    create_server(config)?.await
}
