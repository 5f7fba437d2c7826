// src/models/inventory.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// --- 1. Produtos ---
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
}

// --- 2. Tipo de movimentação ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entrada,
    Saida,
    Ajuste,
}

impl MovementKind {
    // Rótulo exibido no painel (coluna "Tipo")
    pub fn label(self) -> &'static str {
        match self {
            MovementKind::Entrada => "Entrada",
            MovementKind::Saida => "Saída",
            MovementKind::Ajuste => "Ajuste",
        }
    }
}

// --- 3. Movimentação (Histórico) ---
// `quantity` é a quantidade registrada; num ajuste pode ser negativa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: i64,
    pub product_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
}
