//! Service runtime: serve requests until shutdown, then stop the sweeper.

use std::future::Future;

use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::adapter::inbound::http::router;
use crate::application::session::ShutdownOutcome;
use crate::error::Result;
use crate::infrastructure::bootstrap::Services;
use crate::infrastructure::config::settings::Config;

/// Build the multi-threaded runtime sized by `server.worker_threads`.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn build_runtime(config: &Config) -> Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.worker_threads)
        .thread_name("stakeboard-worker")
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run(config: Config) -> Result<()> {
    let listener = TcpListener::bind(config.server.bind_address()).await?;
    let services = Services::from_config(&config);
    serve(&config, &services, listener, shutdown_signal()).await?;
    Ok(())
}

/// Serve on `listener` until `shutdown` resolves.
///
/// The sweeper starts before the first request is accepted. Once the server
/// has drained it is given `session.shutdown_grace_secs` to stop.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(
    config: &Config,
    services: &Services,
    listener: TcpListener,
    shutdown: F,
) -> Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let sweeper = services.sweeper(config).start();
    let address = listener.local_addr()?;
    info!(
        %address,
        ttl_secs = config.session.ttl_secs,
        max_stake = config.ledger.max_stake,
        workers = config.server.worker_threads,
        "Stakeboard listening"
    );

    let served = axum::serve(listener, router(services.app_state()))
        .with_graceful_shutdown(shutdown)
        .await;

    let outcome = sweeper.shutdown(config.session.shutdown_grace()).await;
    served?;
    info!(
        active_sessions = services.sessions.active_session_count(),
        markets = services.ledger.market_count(),
        ?outcome,
        "Stakeboard stopped"
    );
    Ok(outcome)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(error) => {
            warn!(%error, "Failed to listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
