// src/models/chart.rs

use serde::Serialize;

// Espelho tipado do objeto de configuração da biblioteca de gráficos.
// Serializa no formato que a biblioteca espera (camelCase, `type`, etc).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Uma cor para a série inteira ou uma cor por ponto.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Colors,
    pub border_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins::default(),
            scales: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u32,
}

impl Scales {
    /// Eixo Y a partir de zero com passo fixo.
    pub fn y_from_zero(step_size: u32) -> Self {
        Self {
            y: Axis {
                begin_at_zero: true,
                ticks: Ticks { step_size },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_the_renderer_shape() {
        let config = ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec!["A".into()],
                datasets: vec![Dataset {
                    label: "Qtd".into(),
                    data: vec![3.0],
                    background_color: Colors::PerPoint(vec!["red".into()]),
                    border_color: Colors::Single("blue".into()),
                    border_width: Some(2),
                    tension: None,
                    fill: None,
                }],
            },
            options: ChartOptions {
                plugins: Plugins {
                    legend: Legend { display: Some(false), position: None },
                    title: None,
                },
                scales: Some(Scales::y_from_zero(20)),
                ..ChartOptions::default()
            },
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], json!(["red"]));
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "blue");
        assert!(value["data"]["datasets"][0].get("tension").is_none());
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        assert_eq!(value["options"]["plugins"]["legend"], json!({"display": false}));
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["options"]["scales"]["y"]["ticks"]["stepSize"], 20);
    }
}
