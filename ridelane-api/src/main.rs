use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ridelane_api::{app, AppState};
use ridelane_booking::{BookingManager, MockPaymentAdapter, PaymentOrchestrator};
use ridelane_catalog::TripCatalog;
use ridelane_store::{
    LocalBookingRepository, LocalSessionRepository, LocalStore, StaticTrackingFeed,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ridelane_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ridelane_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Ridelane API on port {}", config.server.port);

    if let Some(dir) = std::path::Path::new(&config.storage.path).parent() {
        std::fs::create_dir_all(dir).expect("Failed to create store directory");
    }
    let store = Arc::new(LocalStore::new(&config.storage.path));

    let manager = Arc::new(BookingManager::new(Arc::new(LocalBookingRepository::new(
        store.clone(),
    ))));
    let payments = Arc::new(PaymentOrchestrator::new(Arc::new(MockPaymentAdapter::new(
        Duration::from_millis(config.business_rules.payment_delay_ms),
    ))));

    let app_state = AppState {
        catalog: Arc::new(TripCatalog::seed_demo()),
        manager,
        payments,
        session_repo: Arc::new(LocalSessionRepository::new(store.clone())),
        tracking: Arc::new(StaticTrackingFeed::seed_demo()),
        flows: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
        rules: config.business_rules.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
