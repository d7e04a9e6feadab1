use anyhow::Result;

use konovo_server::config::ServerConfig;
use konovo_server::routes;
use konovo_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("konovo_server=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new(&config)?;
    let app = routes::router(state, &config.cors_allow_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "listening on {} (upstream {})",
        config.bind_addr,
        config.upstream_base_url
    );
    axum::serve(listener, app).await?;

    Ok(())
}
