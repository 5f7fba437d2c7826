//src/main.rs

use tokio::net::TcpListener;

use wms_dashboard::{
    config::{AppState, Settings},
    init_tracing, routes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env();
    let app_state = AppState::seeded();
    let app = routes::app(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
