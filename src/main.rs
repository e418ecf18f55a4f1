use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tokenboard::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    startup::initialize_defaults(&db)
        .await
        .expect("Failed to initialize default settings");
    startup::seed_master_catalog(&db, &config)
        .await
        .expect("Failed to seed master catalog");

    let state = AppState { db };

    let app = router::routes()
        .layer(startup::build_cors_layer())
        .with_state(state);

    let address = format!("{}:{}", config.host, config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind listener");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
