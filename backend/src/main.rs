use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bnuuy_time_backend::{app::build_router, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bnuuy_time_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        buns_file = %config.buns_file.display(),
        static_dir = %config.static_dir.display(),
        default_time_zone = %config.default_time_zone,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
