use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use monastery_search::dataset::Dataset;
use monastery_search::search::handlers::{handle_health, handle_search, handle_suggestions};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8007".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--bind" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                std::process::exit(1);
            }
            _ => {
                i += 1;
            }
        }
    }

    // Fail fast on malformed records before accepting any traffic.
    let dataset = Arc::new(Dataset::load()?);
    tracing::info!(
        "Loaded {} records ({} archives, {} monasteries, {} festivals)",
        dataset.len(),
        dataset.archive_count(),
        dataset.monastery_count(),
        dataset.festival_count()
    );

    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/suggestions", get(handle_suggestions))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .layer(Extension(dataset));

    tracing::info!("HTTP server listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
