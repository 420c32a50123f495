use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use komento_mock_server::MockServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let state = Arc::new(Mutex::new(MockServer::new()));
    let app = komento_mock_server::router(state);

    // The port the web client's base url points at
    let addr = SocketAddr::from(([127, 0, 0, 1], 5001));
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("serving axum webserver")
}
