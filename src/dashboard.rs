// src/dashboard.rs

use crate::client::{
    RECENT_ACTIVITIES_PATH, STOCK_BY_CATEGORY_PATH, STOCK_MOVEMENTS_PATH, USER_STATS_PATH,
};

pub mod activity;
pub mod charts;
pub mod palette;
pub mod pipeline;

pub use pipeline::{Dashboard, DashboardSummary, ReportStatus};

// Os quatro relatórios do painel, cada um com seu recurso e sua superfície.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    UserStats,
    StockMovements,
    StockByCategory,
    RecentActivities,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::UserStats,
        ReportKind::StockMovements,
        ReportKind::StockByCategory,
        ReportKind::RecentActivities,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ReportKind::UserStats => USER_STATS_PATH,
            ReportKind::StockMovements => STOCK_MOVEMENTS_PATH,
            ReportKind::StockByCategory => STOCK_BY_CATEGORY_PATH,
            ReportKind::RecentActivities => RECENT_ACTIVITIES_PATH,
        }
    }

    /// Id do elemento que recebe o relatório no modelo da página.
    pub fn surface_id(self) -> &'static str {
        match self {
            ReportKind::UserStats => "userStatsChart",
            ReportKind::StockMovements => "stockMovementsChart",
            ReportKind::StockByCategory => "stockCategoryChart",
            ReportKind::RecentActivities => "activitiesTable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::UserStats => "user stats",
            ReportKind::StockMovements => "stock movements",
            ReportKind::StockByCategory => "stock by category",
            ReportKind::RecentActivities => "recent activities",
        }
    }
}
