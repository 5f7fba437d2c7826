// src/models/reports.rs

use serde::{Deserialize, Serialize};

// Os payloads abaixo são produzidos pelo backend de relatórios e consumidos
// pelo painel. Os nomes dos campos fazem parte do contrato JSON.

// 1. Estatísticas de usuários (gráfico de rosca)
// `admins` é um subconjunto sobreposto, não somado a `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub active: u64,
    pub inactive: u64,
    pub admins: u64,
    pub total: u64,
    #[serde(default)]
    pub regular: u64,
}

// 2. Movimentações de estoque por período (gráfico de linhas)
// `entries` e `exits` são alinhados por índice com `labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovementSeries {
    pub labels: Vec<String>,
    pub entries: Vec<f64>,
    pub exits: Vec<f64>,
}

// 3. Estoque por categoria (gráfico de barras)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockByCategory {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

// 4. Atividade recente (tabela)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub item: String,
    pub quantity: i64,
    // Já vem formatada pelo backend, nunca é interpretada.
    pub date: String,
}

// Resposta do POST /admin/toggle_status/{id}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleStatusResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_record_uses_type_on_the_wire() {
        let json = r#"{"type":"Saída","item":"Mouse","quantity":-3,"date":"2024-01-02"}"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "Saída");
        assert_eq!(record.quantity, -3);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "Saída");
    }

    #[test]
    fn user_stats_accepts_payload_without_regular() {
        let stats: UserStats =
            serde_json::from_str(r#"{"active":5,"inactive":2,"admins":1,"total":7}"#).unwrap();
        assert_eq!(stats.regular, 0);
        assert_eq!(stats.total, 7);
    }
}
