// src/client.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::models::reports::{
    ActivityRecord, StockByCategory, StockMovementSeries, ToggleStatusResponse, UserStats,
};

pub mod http;
pub use http::HttpReportClient;

// Recursos do backend consumidos pelo painel
pub const USER_STATS_PATH: &str = "/reports/api/user_stats";
pub const STOCK_MOVEMENTS_PATH: &str = "/reports/api/stock_movements";
pub const STOCK_BY_CATEGORY_PATH: &str = "/reports/api/stock_by_category";
pub const RECENT_ACTIVITIES_PATH: &str = "/reports/api/recent_activities";

pub fn toggle_status_path(user_id: i64) -> String {
    format!("/admin/toggle_status/{user_id}")
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("falha de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("resposta com status {status}")]
    Status { status: u16 },

    #[error("resposta não é um JSON válido: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Origem dos relatórios do painel. Cada chamada é uma única tentativa.
#[async_trait]
pub trait ReportApi: Send + Sync {
    async fn user_stats(&self) -> Result<UserStats, ClientError>;

    async fn stock_movements(&self) -> Result<StockMovementSeries, ClientError>;

    async fn stock_by_category(&self) -> Result<StockByCategory, ClientError>;

    async fn recent_activities(&self) -> Result<Vec<ActivityRecord>, ClientError>;

    async fn toggle_user_status(&self, user_id: i64) -> Result<ToggleStatusResponse, ClientError>;
}
