//! Vehicle Storage Allocation - Axum Server

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_storage::api::{self, AppState};
use vehicle_storage::catalog::Catalog;
use vehicle_storage::demo_data;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("vehicle_storage=info".parse().unwrap()),
        )
        .init();

    // A catalog file is the real input; without one, serve the demo catalog
    // so the quickstart works out of the box. A broken catalog is fatal.
    let catalog = match std::env::var("CATALOG_PATH") {
        Ok(path) => match Catalog::from_file(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(path = %path, error = %e, "failed to load catalog");
                std::process::exit(1);
            }
        },
        Err(_) => {
            info!("CATALOG_PATH not set, using the Baltimore demo catalog");
            Catalog::new(demo_data::generate_baltimore())
        }
    };
    info!(
        locations = catalog.locations().len(),
        listings = catalog.listing_count(),
        "catalog ready"
    );

    let state = Arc::new(AppState::new(catalog));
    let app = api::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 7860));
    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
