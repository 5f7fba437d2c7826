// src/client/http.rs

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;

use super::{
    ClientError, ReportApi, RECENT_ACTIVITIES_PATH, STOCK_BY_CATEGORY_PATH,
    STOCK_MOVEMENTS_PATH, USER_STATS_PATH, toggle_status_path,
};
use crate::models::reports::{
    ActivityRecord, StockByCategory, StockMovementSeries, ToggleStatusResponse, UserStats,
};

// Cliente HTTP do painel. Sem novas tentativas, sem cache, sem timeout.
#[derive(Clone)]
pub struct HttpReportClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpReportClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ReportApi for HttpReportClient {
    async fn user_stats(&self) -> Result<UserStats, ClientError> {
        self.get_json(USER_STATS_PATH).await
    }

    async fn stock_movements(&self) -> Result<StockMovementSeries, ClientError> {
        self.get_json(STOCK_MOVEMENTS_PATH).await
    }

    async fn stock_by_category(&self) -> Result<StockByCategory, ClientError> {
        self.get_json(STOCK_BY_CATEGORY_PATH).await
    }

    async fn recent_activities(&self) -> Result<Vec<ActivityRecord>, ClientError> {
        self.get_json(RECENT_ACTIVITIES_PATH).await
    }

    // O backend responde 400 com corpo JSON quando recusa a alteração,
    // então o corpo é lido independentemente do status.
    async fn toggle_user_status(&self, user_id: i64) -> Result<ToggleStatusResponse, ClientError> {
        let response = self
            .http
            .post(self.url(&toggle_status_path(user_id)))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
