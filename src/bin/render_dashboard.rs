// src/bin/render_dashboard.rs

// Roda o painel uma vez contra o backend e imprime o que seria desenhado.

use std::sync::Arc;

use serde_json::json;
use wms_dashboard::{
    client::HttpReportClient,
    config::Settings,
    dashboard::{Dashboard, ReportKind},
    init_tracing,
    render::Page,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env();
    tracing::info!("📊 Carregando painel de {}", settings.base_url);

    let api = Arc::new(HttpReportClient::new(settings.base_url));
    let page = Arc::new(Page::reports_template());
    let summary = Dashboard::new(api, page.clone()).load_all().await;

    let charts: serde_json::Map<String, serde_json::Value> = ReportKind::ALL
        .iter()
        .filter(|kind| **kind != ReportKind::RecentActivities)
        .map(|kind| -> Result<(String, serde_json::Value), serde_json::Error> {
            let drawn = page.charts_drawn(kind.surface_id());
            Ok((kind.surface_id().to_string(), serde_json::to_value(drawn.last())?))
        })
        .collect::<Result<_, _>>()?;

    let rows: Vec<String> = page
        .table_rows(ReportKind::RecentActivities.surface_id())
        .iter()
        .map(|row| row.to_html())
        .collect();

    let output = json!({
        "summary": summary,
        "charts": charts,
        "activities": rows,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
