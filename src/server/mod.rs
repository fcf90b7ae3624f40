//! Minimal HTTP server that answers every request with the secret.

use anyhow::Result;
use axum::{extract::State, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for the secret server. The secret is captured once at
/// startup and never mutated, so handlers need no synchronization.
#[derive(Clone)]
pub struct ServerState {
    pub secret: Arc<String>,
}

pub struct SecretServer {
    listener: TcpListener,
    state: ServerState,
}

impl SecretServer {
    /// Bind the listener. A bind failure (port in use, insufficient
    /// privilege) is surfaced to the caller; there is no fallback port.
    pub async fn bind(addr: SocketAddr, secret: String) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let state = ServerState {
            secret: Arc::new(secret),
        };
        Ok(Self { listener, state })
    }

    /// Serve until the process is killed. There is no shutdown path.
    pub async fn serve(self) -> Result<()> {
        info!("Serving secret on {}", self.listener.local_addr()?);
        let app = build_routes(self.state);
        axum::serve(self.listener, app).await?;
        Ok(())
    }
}

/// Build the router: one fallback handler matching every path and method.
pub fn build_routes(state: ServerState) -> Router {
    Router::new()
        .fallback(secret_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn secret_handler(State(state): State<ServerState>) -> String {
    format!("Our secret is: \"{}\"!\n", state.secret)
}
