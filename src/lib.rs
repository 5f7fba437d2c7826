pub mod client;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod ui;

// Inicializa o logger: nível via RUST_LOG, `info` por padrão.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
