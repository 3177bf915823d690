use anyhow::Context;
use payment_order_service::api::{self, functions::DeclaredFunctions};
use payment_order_service::config::AppConfig;
use payment_order_service::database::{self, OrderRepository, PoolConfig, ProviderConfigRepository};
use payment_order_service::logging::init_tracing;
use payment_order_service::payments::RazorpayConnector;
use payment_order_service::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.logging);
    info!("Starting payment order service");

    let pool = database::init_pool(&config.database.url, PoolConfig::from(&config.database))
        .await
        .context("failed to connect to database")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;
    info!("Database ready");

    let state = AppState::new(
        Arc::new(ProviderConfigRepository::new(
            pool.clone(),
            config.gateway.config_key.clone(),
        )),
        Arc::new(OrderRepository::new(pool)),
        Arc::new(RazorpayConnector::new(config.gateway.clone())),
        config.functions.clone(),
    );

    let functions = DeclaredFunctions::from_settings(&config.functions);
    for function in functions.all() {
        info!(
            function = function.name,
            region = %function.region,
            timeout_secs = function.timeout.as_secs(),
            memory_mb = function.memory_mb,
            enforce_app_check = function.enforce_app_check,
            "function registered"
        );
    }

    let app = api::router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
