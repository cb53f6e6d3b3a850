//! Udyam registration portal API server

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use udyam_api::{build_router, ApiState, Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = config.bind_addr.clone();
    let app = build_router(ApiState::new(&config));

    tracing::info!(%addr, "registration portal API listening");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
