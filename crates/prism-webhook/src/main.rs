//! Webhook sink for Prism agent events: a standalone logging server.
//!
//! Point the agent's webhook notification URL at this process and every
//! delivery (connection state changes, credential protocol steps,
//! presentation updates) is logged in full: request line, headers, and
//! body, with JSON bodies pretty-printed. Nothing is stored; this exists
//! so a developer watching two agents talk can see the events as they
//! happen.
//!
//! Single-threaded on purpose. Event volume in a development flow is a
//! handful of requests per second at most, and ordered log output is
//! worth more than throughput here.

mod routes;

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log every HTTP request sent to this server, then answer 200.
#[derive(Parser, Debug)]
#[command(name = "prism-webhook", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(default_value_t = 9052)]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let app = routes::router();

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("prism-webhook listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
