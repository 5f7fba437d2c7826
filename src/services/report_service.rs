// src/services/report_service.rs

use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

use crate::{
    db::{ReportRepository, UserRepository},
    models::{
        inventory::MovementKind,
        reports::{ActivityRecord, StockByCategory, StockMovementSeries, UserStats},
    },
};

// Janela do gráfico de movimentações (dias, incluindo hoje)
pub const MOVEMENT_WINDOW_DAYS: i64 = 7;
// Quantidade de linhas da tabela de atividade recente
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Clone)]
pub struct ReportService {
    users: UserRepository,
    reports: ReportRepository,
}

impl ReportService {
    pub fn new(users: UserRepository, reports: ReportRepository) -> Self {
        Self { users, reports }
    }

    pub async fn user_stats(&self) -> UserStats {
        let users = self.users.list_all().await;

        let total = users.len() as u64;
        let active = users.iter().filter(|u| u.active).count() as u64;
        let admins = users.iter().filter(|u| u.is_admin()).count() as u64;

        UserStats {
            active,
            inactive: total - active,
            admins,
            total,
            regular: total - admins,
        }
    }

    // Totais diários de entradas e saídas, do dia mais antigo até `now`.
    pub async fn stock_movements(&self, now: NaiveDateTime) -> StockMovementSeries {
        let movements = self.reports.movements().await;
        let today = now.date();

        let mut series = StockMovementSeries {
            labels: Vec::new(),
            entries: Vec::new(),
            exits: Vec::new(),
        };

        for offset in (0..MOVEMENT_WINDOW_DAYS).rev() {
            let day = today - Duration::days(offset);
            let total_for = |kind: MovementKind| -> f64 {
                movements
                    .iter()
                    .filter(|m| m.kind == kind && m.created_at.date() == day)
                    .map(|m| m.quantity as f64)
                    .sum()
            };

            series.labels.push(day.format("%d/%m").to_string());
            series.entries.push(total_for(MovementKind::Entrada));
            series.exits.push(total_for(MovementKind::Saida));
        }

        series
    }

    pub async fn stock_by_category(&self) -> StockByCategory {
        let mut per_category: BTreeMap<String, i64> = BTreeMap::new();
        for product in self.reports.products().await {
            *per_category.entry(product.category).or_default() += product.quantity;
        }

        let (labels, data) = per_category
            .into_iter()
            .map(|(category, quantity)| (category, quantity as f64))
            .unzip();

        StockByCategory { labels, data }
    }

    pub async fn recent_activities(&self) -> Vec<ActivityRecord> {
        self.reports
            .recent_movements(RECENT_ACTIVITY_LIMIT)
            .await
            .into_iter()
            .map(|(movement, item)| ActivityRecord {
                kind: movement.kind.label().to_string(),
                item,
                quantity: movement.quantity,
                date: movement.created_at.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect()
    }
}
