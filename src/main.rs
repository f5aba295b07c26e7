use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movedrop_channel::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    middleware::auth::ApiKeyGate,
    routes::build_app,
    state::AppState,
    store::PgStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movedrop_channel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let gate = ApiKeyGate::new(config.movedrop_api_key.as_deref());
    if !gate.is_configured() {
        tracing::warn!("MOVEDROP_API_KEY is not set; every partner request will be rejected");
    }

    let state = AppState::new(Arc::new(PgStore::new(pool)), gate);
    let app = build_app(state, &config.mount_path);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!(mount_path = %config.mount_path, "listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
