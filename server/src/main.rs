//! Console adapter server: loads settings from the environment (and `.env`), loads the YAML
//! config, mounts the console API and the console bundle.
//!
//! Run from repo root: `cargo run -p console-adapter-server`

use console_adapter::{adapter_routes, AdapterSettings, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("console_adapter=info")),
        )
        .init();

    let settings = AdapterSettings::from_env();
    let state = AppState::from_settings(&settings).await;
    let app = adapter_routes(state.clone(), &settings.console_dir);

    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("console adapter listening on http://{}", addr);
    tracing::info!(upstream = %state.upstream.graphql_url(), "graphql upstream");
    tracing::info!(path = %state.config.path().display(), "config file");
    axum::serve(listener, app).await?;
    Ok(())
}
