// src/handlers/reports.rs

use axum::{extract::State, http::StatusCode, response::{Html, IntoResponse}, Json};

use crate::config::AppState;

// Modelo da página de relatórios: fornece as superfícies que o painel procura.
pub const REPORTS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Relatórios</title></head>
<body>
<main>
  <div class="row">
    <div class="col-md-6"><canvas id="userStatsChart"></canvas></div>
    <div class="col-md-6"><canvas id="stockMovementsChart"></canvas></div>
  </div>
  <div class="row">
    <div class="col-md-6"><canvas id="stockCategoryChart"></canvas></div>
    <div class="col-md-6">
      <table id="activitiesTable" class="table">
        <thead><tr><th>Tipo</th><th>Item</th><th>Quantidade</th><th>Data</th></tr></thead>
        <tbody></tbody>
      </table>
    </div>
  </div>
</main>
</body>
</html>
"#;

// GET /reports/
pub async fn index() -> impl IntoResponse {
    Html(REPORTS_PAGE)
}

// GET /reports/api/user_stats
pub async fn user_stats(State(app_state): State<AppState>) -> impl IntoResponse {
    let stats = app_state.report_service.user_stats().await;
    (StatusCode::OK, Json(stats))
}

// GET /reports/api/stock_movements
pub async fn stock_movements(State(app_state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Local::now().naive_local();
    let series = app_state.report_service.stock_movements(now).await;
    (StatusCode::OK, Json(series))
}

// GET /reports/api/stock_by_category
pub async fn stock_by_category(State(app_state): State<AppState>) -> impl IntoResponse {
    let report = app_state.report_service.stock_by_category().await;
    (StatusCode::OK, Json(report))
}

// GET /reports/api/recent_activities
pub async fn recent_activities(State(app_state): State<AppState>) -> impl IntoResponse {
    let activities = app_state.report_service.recent_activities().await;
    (StatusCode::OK, Json(activities))
}
