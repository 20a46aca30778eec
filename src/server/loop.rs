// Server loop module
// Accepts connections until a shutdown signal, then drains in-flight ones

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use super::connection::handle_connection;
use super::signal::shutdown_signal;
use crate::config::AppState;
use crate::logger;

/// Pause after a failed accept so a persistent error (e.g. EMFILE) cannot spin
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections on `listener` until SIGINT/SIGTERM.
///
/// After the signal no new connection is accepted; the function returns once
/// every connection task has finished.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let mut tasks = JoinSet::new();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                logger::log_shutdown(tasks.len());
                break;
            }

            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(&mut tasks, stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                        tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                    }
                }
            }

            // Reap finished connections so the set does not grow unbounded
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
        }
    }

    drop(listener);
    while tasks.join_next().await.is_some() {}
}
