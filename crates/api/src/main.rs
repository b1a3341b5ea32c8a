use std::net::SocketAddr;
use std::sync::Arc;

use mathmotion_api::config::ServerConfig;
use mathmotion_api::router::build_app_router;
use mathmotion_api::state::AppState;
use mathmotion_core::generation::{Invoker, InvokerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    // The pool, a round-trip check, and migrations all have to succeed
    // before we accept a single request; any failure here is fatal.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = mathmotion_db::create_pool(&database_url)
        .await
        .expect("could not connect to the database");
    mathmotion_db::health_check(&pool)
        .await
        .expect("database did not answer the health check");
    mathmotion_db::run_migrations(&pool)
        .await
        .expect("migrations failed");
    tracing::info!("Database ready (pool + migrations)");

    let invoker = Arc::new(Invoker::new(InvokerConfig {
        python_bin: config.generation.python_bin.clone(),
        script_path: config.generation.script_path.clone(),
        timeout: config.generation.timeout(),
        max_concurrent: config.generation.max_concurrent,
    }));
    tracing::info!(
        script = %config.generation.script_path,
        max_concurrent = config.generation.max_concurrent,
        timeout_secs = config.generation.timeout_secs,
        "Generation invoker ready",
    );
    for dir in &config.video_dirs {
        tracing::info!(dir = %dir.display(), "Content root");
    }

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST is not a valid address"),
        config.port,
    );

    let app = build_app_router(AppState {
        pool: pool.clone(),
        config: Arc::new(config),
        invoker,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("could not bind the listen address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("No longer accepting connections");
    pool.close().await;
    tracing::info!("Shutdown complete");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mathmotion_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve when the process is told to stop.
///
/// SIGINT covers interactive use; SIGTERM is what a process supervisor or
/// container runtime sends first.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("could not install the Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("could not install the SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
