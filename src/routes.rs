// src/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use crate::{config::AppState, handlers};

// Monta o roteador completo do backend de relatórios
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        // Página e relatórios do painel
        .route("/reports/", get(handlers::reports::index))
        .route("/reports/api/user_stats", get(handlers::reports::user_stats))
        .route("/reports/api/stock_movements", get(handlers::reports::stock_movements))
        .route("/reports/api/stock_by_category", get(handlers::reports::stock_by_category))
        .route("/reports/api/recent_activities", get(handlers::reports::recent_activities))
        // Administração
        .route("/admin/toggle_status/{id}", post(handlers::admin::toggle_status))
        .with_state(app_state)
}
