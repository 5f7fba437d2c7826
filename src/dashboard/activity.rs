// src/dashboard/activity.rs

use serde::Serialize;

use super::palette::{self, BadgeClass};
use crate::models::reports::ActivityRecord;

/// Uma linha já formatada da tabela de atividade recente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRow {
    pub badge: BadgeClass,
    pub kind: String,
    pub item: String,
    pub quantity: String,
    pub date: String,
}

impl ActivityRow {
    pub fn from_record(record: &ActivityRecord) -> Self {
        Self {
            badge: palette::badge_for(&record.kind),
            kind: record.kind.clone(),
            item: record.item.clone(),
            quantity: format_quantity(record.quantity),
            date: record.date.clone(),
        }
    }

    /// Células da linha (`<td>`), com o texto escapado.
    pub fn to_html(&self) -> String {
        format!(
            "<td><span class=\"badge bg-{}\">{}</span></td><td>{}</td><td>{}</td><td>{}</td>",
            self.badge.as_str(),
            escape_html(&self.kind),
            escape_html(&self.item),
            escape_html(&self.quantity),
            escape_html(&self.date),
        )
    }
}

// Positivos ganham "+", zero e negativos ficam como estão
pub fn format_quantity(quantity: i64) -> String {
    if quantity > 0 {
        format!("+{quantity}")
    } else {
        quantity.to_string()
    }
}

pub fn activity_rows(records: &[ActivityRecord]) -> Vec<ActivityRow> {
    records.iter().map(ActivityRow::from_record).collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
