// Connection handling module
// Serves one accepted TCP connection

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio::task::JoinSet;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a single connection in a task tracked by `tasks`.
///
/// The connection speaks HTTP/1.1 with keep-alive as configured and is cut
/// off after `performance.connection_timeout` seconds (0 disables the limit).
pub fn handle_connection(
    tasks: &mut JoinSet<()>,
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) {
    let state = Arc::clone(state);

    tasks.spawn(async move {
        let io = TokioIo::new(stream);
        let timeout_secs = state.config.performance.connection_timeout;

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.performance.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        if timeout_secs == 0 {
            if let Err(err) = conn.await {
                logger::log_connection_error(&err);
            }
            return;
        }

        match tokio::time::timeout(Duration::from_secs(timeout_secs), conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {timeout_secs} seconds"
            )),
        }
    });
}
