// src/dashboard/pipeline.rs

use std::sync::Arc;

use serde::Serialize;

use super::{activity, charts, ReportKind};
use crate::{
    client::{ClientError, ReportApi},
    models::chart::ChartConfig,
    render::{Renderer, SurfaceProvider},
};

/// Resultado de uma carga. Nenhum deles é mostrado ao usuário final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Rendered,
    // Transporte, status não-2xx ou corpo que não é JSON
    FetchFailed,
    // A superfície não existe na página; nada foi desenhado
    MissingSurface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub user_stats: ReportStatus,
    pub stock_movements: ReportStatus,
    pub stock_by_category: ReportStatus,
    pub recent_activities: ReportStatus,
}

impl DashboardSummary {
    pub fn status(&self, kind: ReportKind) -> ReportStatus {
        match kind {
            ReportKind::UserStats => self.user_stats,
            ReportKind::StockMovements => self.stock_movements,
            ReportKind::StockByCategory => self.stock_by_category,
            ReportKind::RecentActivities => self.recent_activities,
        }
    }
}

// O pipeline do painel: busca cada relatório uma única vez e desenha assim
// que ele chega, sem coordenação entre os quatro.
pub struct Dashboard<A: ?Sized, P: ?Sized> {
    api: Arc<A>,
    page: Arc<P>,
}

impl<A: ?Sized, P: ?Sized> Clone for Dashboard<A, P> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            page: Arc::clone(&self.page),
        }
    }
}

impl<A, P> Dashboard<A, P>
where
    A: ReportApi + ?Sized,
    P: SurfaceProvider + Renderer + ?Sized,
{
    pub fn new(api: Arc<A>, page: Arc<P>) -> Self {
        Self { api, page }
    }

    /// Dispara as quatro cargas ao mesmo tempo; a ordem de conclusão não importa.
    pub async fn load_all(&self) -> DashboardSummary {
        let (user_stats, stock_movements, stock_by_category, recent_activities) = tokio::join!(
            self.load_user_stats(),
            self.load_stock_movements(),
            self.load_stock_by_category(),
            self.load_recent_activities(),
        );

        let summary = DashboardSummary {
            user_stats,
            stock_movements,
            stock_by_category,
            recent_activities,
        };
        tracing::debug!(?summary, "carga do painel concluída");
        summary
    }

    pub async fn load_user_stats(&self) -> ReportStatus {
        let fetched = self.api.user_stats().await;
        self.draw(ReportKind::UserStats, fetched.map(|stats| charts::user_stats_chart(&stats)))
    }

    pub async fn load_stock_movements(&self) -> ReportStatus {
        let fetched = self.api.stock_movements().await;
        self.draw(
            ReportKind::StockMovements,
            fetched.map(|series| charts::stock_movements_chart(&series)),
        )
    }

    pub async fn load_stock_by_category(&self) -> ReportStatus {
        let fetched = self.api.stock_by_category().await;
        self.draw(
            ReportKind::StockByCategory,
            fetched.map(|report| charts::stock_by_category_chart(&report)),
        )
    }

    // Recarregar substitui as linhas existentes, nunca acrescenta.
    pub async fn load_recent_activities(&self) -> ReportStatus {
        let kind = ReportKind::RecentActivities;
        let records = match self.api.recent_activities().await {
            Ok(records) => records,
            Err(e) => return fetch_failed(kind, &e),
        };

        let Some(body) = self.page.table_body(kind.surface_id()) else {
            return missing_surface(kind);
        };

        let rows = activity::activity_rows(&records);
        tracing::debug!("📋 {} linhas de atividade", rows.len());
        self.page.replace_rows(&body, rows);
        ReportStatus::Rendered
    }

    fn draw(&self, kind: ReportKind, fetched: Result<ChartConfig, ClientError>) -> ReportStatus {
        let config = match fetched {
            Ok(config) => config,
            Err(e) => return fetch_failed(kind, &e),
        };

        let Some(surface) = self.page.chart_surface(kind.surface_id()) else {
            return missing_surface(kind);
        };

        self.page.draw_chart(&surface, config);
        ReportStatus::Rendered
    }
}

// Falhas de busca só vão para o log de diagnóstico.
fn fetch_failed(kind: ReportKind, error: &ClientError) -> ReportStatus {
    tracing::error!("Error loading {}: {}", kind.label(), error);
    ReportStatus::FetchFailed
}

fn missing_surface(kind: ReportKind) -> ReportStatus {
    tracing::error!(
        "Error rendering {}: surface #{} not found",
        kind.label(),
        kind.surface_id()
    );
    ReportStatus::MissingSurface
}
