use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mxgate::server::{self, AppState};
use mxgate::{RateLimiter, ratelimit, system_resolver};

#[derive(Parser)]
#[command(name = "mxgate-server")]
#[command(about = "Email-domain MX validation service")]
struct Args {
    /// Port to listen on (PORT env var also works)
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Max requests per client per window
    #[arg(long, default_value_t = ratelimit::DEFAULT_CAPACITY)]
    rate_limit: usize,

    /// Rate-limit window in seconds
    #[arg(long, default_value_t = ratelimit::DEFAULT_WINDOW_SECS)]
    rate_window: u64,

    /// DNS lookup timeout in seconds
    #[arg(long, default_value_t = 5)]
    resolver_timeout: u64,

    /// Allowed CORS origins (comma separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ]
    )]
    allow_origin: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let resolver = system_resolver().context("reading system DNS configuration")?;
    let limiter = RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window));
    let state = Arc::new(AppState::new(
        limiter,
        resolver,
        Duration::from_secs(args.resolver_timeout),
    ));

    let cors = server::cors_layer(&args.allow_origin).context("invalid CORS origin")?;
    let app = server::router(state, cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, rate_limit = args.rate_limit, rate_window = args.rate_window, "mxgate listening");

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    );

    // Exit on the first signal; no connection draining.
    tokio::select! {
        result = server.into_future() => result.context("server error")?,
        () = shutdown_signal() => info!("shutdown signal received, exiting"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        _ = terminate => {},
    }
}
