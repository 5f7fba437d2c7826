// src/dashboard/charts.rs

use super::palette::{
    self, BORDER_ALPHA, BORDER_WIDTH, CATEGORY_DATASET_LABEL, CATEGORY_STEP, FILL_ALPHA,
    AREA_ALPHA, MOVEMENT_SERIES, MOVEMENT_STEP, MOVEMENT_TENSION, USER_STATS_DATASET_LABEL,
    USER_STATUS_SEGMENTS,
};
use crate::models::{
    chart::{
        ChartConfig, ChartData, ChartKind, ChartOptions, Colors, Dataset, Legend,
        LegendPosition, Plugins, Scales, Title,
    },
    reports::{StockByCategory, StockMovementSeries, UserStats},
};

// Usuários -> gráfico de rosca com três fatias fixas
pub fn user_stats_chart(stats: &UserStats) -> ChartConfig {
    let values = [stats.active, stats.inactive, stats.admins];

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: USER_STATUS_SEGMENTS.iter().map(|s| s.label.to_string()).collect(),
            datasets: vec![Dataset {
                label: USER_STATS_DATASET_LABEL.to_string(),
                data: values.iter().map(|v| *v as f64).collect(),
                background_color: Colors::PerPoint(
                    USER_STATUS_SEGMENTS.iter().map(|s| s.color.rgba(FILL_ALPHA)).collect(),
                ),
                border_color: Colors::PerPoint(
                    USER_STATUS_SEGMENTS.iter().map(|s| s.color.rgba(BORDER_ALPHA)).collect(),
                ),
                border_width: Some(BORDER_WIDTH),
                tension: None,
                fill: None,
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Legend { display: None, position: Some(LegendPosition::Bottom) },
                title: Some(Title {
                    display: true,
                    text: Some(palette::user_stats_title(stats.total)),
                }),
            },
            ..ChartOptions::default()
        },
    }
}

// Movimentações -> duas séries preenchidas (entradas x saídas)
pub fn stock_movements_chart(series: &StockMovementSeries) -> ChartConfig {
    let [entries, exits] = MOVEMENT_SERIES;
    let line = |segment: palette::Segment, data: &[f64]| Dataset {
        label: segment.label.to_string(),
        data: data.to_vec(),
        background_color: Colors::Single(segment.color.rgba(AREA_ALPHA)),
        border_color: Colors::Single(segment.color.rgba(BORDER_ALPHA)),
        border_width: None,
        tension: Some(MOVEMENT_TENSION),
        fill: Some(true),
    };

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![line(entries, &series.entries), line(exits, &series.exits)],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Legend { display: None, position: Some(LegendPosition::Top) },
                title: Some(Title { display: false, text: None }),
            },
            scales: Some(Scales::y_from_zero(MOVEMENT_STEP)),
            ..ChartOptions::default()
        },
    }
}

// Estoque por categoria -> barras com cores cíclicas, sem legenda
pub fn stock_by_category_chart(report: &StockByCategory) -> ChartConfig {
    // Uma cor por barra, mesmo se rótulos e dados vierem com tamanhos diferentes
    let bars = report.labels.len().max(report.data.len());
    let bar_colors = |alpha: f32| -> Vec<String> {
        (0..bars)
            .map(|i| palette::category_color(i).rgba(alpha))
            .collect()
    };

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: report.labels.clone(),
            datasets: vec![Dataset {
                label: CATEGORY_DATASET_LABEL.to_string(),
                data: report.data.clone(),
                background_color: Colors::PerPoint(bar_colors(FILL_ALPHA)),
                border_color: Colors::PerPoint(bar_colors(BORDER_ALPHA)),
                border_width: Some(BORDER_WIDTH),
                tension: None,
                fill: None,
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Legend { display: Some(false), position: None },
                title: None,
            },
            scales: Some(Scales::y_from_zero(CATEGORY_STEP)),
            ..ChartOptions::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_stats_maps_to_doughnut_in_fixed_order() {
        let stats = UserStats { active: 5, inactive: 2, admins: 1, total: 7, regular: 0 };
        let config = user_stats_chart(&stats);

        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.data.labels, vec!["Ativos", "Inativos", "Administradores"]);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].data, vec![5.0, 2.0, 1.0]);

        let title = config.options.plugins.title.unwrap();
        assert!(title.display);
        assert!(title.text.unwrap().contains('7'));
        assert_eq!(config.options.plugins.legend.position, Some(LegendPosition::Bottom));
    }

    #[test]
    fn user_stats_colors_follow_the_segment_table() {
        let stats = UserStats { active: 1, inactive: 1, admins: 1, total: 2, regular: 1 };
        let config = user_stats_chart(&stats);

        assert_eq!(
            config.data.datasets[0].background_color,
            Colors::PerPoint(vec![
                "rgba(40, 167, 69, 0.8)".into(),
                "rgba(255, 193, 7, 0.8)".into(),
                "rgba(220, 53, 69, 0.8)".into(),
            ])
        );
    }

    #[test]
    fn stock_movements_has_two_filled_series_from_zero_step_ten() {
        let series = StockMovementSeries {
            labels: vec!["Jan".into(), "Fev".into()],
            entries: vec![10.0, 20.0],
            exits: vec![5.0, 7.0],
        };
        let config = stock_movements_chart(&series);

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels, vec!["Jan", "Fev"]);
        let [entries, exits] = [&config.data.datasets[0], &config.data.datasets[1]];
        assert_eq!(entries.label, "Entradas");
        assert_eq!(entries.data, vec![10.0, 20.0]);
        assert_eq!(exits.label, "Saídas");
        assert_eq!(exits.data, vec![5.0, 7.0]);
        assert_eq!(entries.fill, Some(true));
        assert_eq!(exits.fill, Some(true));

        let scales = config.options.scales.unwrap();
        assert!(scales.y.begin_at_zero);
        assert_eq!(scales.y.ticks.step_size, 10);
    }

    #[test]
    fn stock_by_category_cycles_palette_and_hides_legend() {
        let labels: Vec<String> = (0..8).map(|i| format!("Cat {i}")).collect();
        let report = StockByCategory { data: vec![1.0; 8], labels };
        let config = stock_by_category_chart(&report);

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.options.plugins.legend.display, Some(false));

        let Colors::PerPoint(colors) = &config.data.datasets[0].background_color else {
            panic!("expected one color per bar");
        };
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[6], colors[0]);
        assert_eq!(colors[7], "rgba(255, 99, 132, 0.8)");

        let scales = config.options.scales.unwrap();
        assert!(scales.y.begin_at_zero);
        assert_eq!(scales.y.ticks.step_size, 20);
    }

    #[test]
    fn doughnut_serializes_exactly() {
        let stats = UserStats { active: 5, inactive: 2, admins: 1, total: 7, regular: 6 };
        let value = serde_json::to_value(user_stats_chart(&stats)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "doughnut",
                "data": {
                    "labels": ["Ativos", "Inativos", "Administradores"],
                    "datasets": [{
                        "label": "Usuários",
                        "data": [5.0, 2.0, 1.0],
                        "backgroundColor": [
                            "rgba(40, 167, 69, 0.8)",
                            "rgba(255, 193, 7, 0.8)",
                            "rgba(220, 53, 69, 0.8)"
                        ],
                        "borderColor": [
                            "rgba(40, 167, 69, 1)",
                            "rgba(255, 193, 7, 1)",
                            "rgba(220, 53, 69, 1)"
                        ],
                        "borderWidth": 2
                    }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": {
                        "legend": { "position": "bottom" },
                        "title": { "display": true, "text": "Total de Usuários: 7" }
                    }
                }
            })
        );
    }

    #[test]
    fn line_serializes_exactly() {
        let series = StockMovementSeries {
            labels: vec!["31/10".into(), "01/11".into()],
            entries: vec![12.0, 30.0],
            exits: vec![4.0, 9.0],
        };
        let value = serde_json::to_value(stock_movements_chart(&series)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "line",
                "data": {
                    "labels": ["31/10", "01/11"],
                    "datasets": [
                        {
                            "label": "Entradas",
                            "data": [12.0, 30.0],
                            "borderColor": "rgba(40, 167, 69, 1)",
                            "backgroundColor": "rgba(40, 167, 69, 0.2)",
                            "tension": 0.4,
                            "fill": true
                        },
                        {
                            "label": "Saídas",
                            "data": [4.0, 9.0],
                            "borderColor": "rgba(220, 53, 69, 1)",
                            "backgroundColor": "rgba(220, 53, 69, 0.2)",
                            "tension": 0.4,
                            "fill": true
                        }
                    ]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": {
                        "legend": { "position": "top" },
                        "title": { "display": false }
                    },
                    "scales": { "y": { "beginAtZero": true, "ticks": { "stepSize": 10 } } }
                }
            })
        );
    }

    #[test]
    fn bar_serializes_exactly() {
        let report = StockByCategory {
            labels: vec!["Alimentos".into(), "Roupas".into()],
            data: vec![33.0, 60.0],
        };
        let value = serde_json::to_value(stock_by_category_chart(&report)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "bar",
                "data": {
                    "labels": ["Alimentos", "Roupas"],
                    "datasets": [{
                        "label": "Quantidade em Estoque",
                        "data": [33.0, 60.0],
                        "backgroundColor": ["rgba(54, 162, 235, 0.8)", "rgba(255, 99, 132, 0.8)"],
                        "borderColor": ["rgba(54, 162, 235, 1)", "rgba(255, 99, 132, 1)"],
                        "borderWidth": 2
                    }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": { "legend": { "display": false } },
                    "scales": { "y": { "beginAtZero": true, "ticks": { "stepSize": 20 } } }
                }
            })
        );
    }

    #[test]
    fn every_bar_gets_a_color_when_data_outnumbers_labels() {
        let report = StockByCategory { labels: vec!["Roupas".into()], data: vec![60.0, 21.0] };
        let config = stock_by_category_chart(&report);

        assert_eq!(
            config.data.datasets[0].background_color,
            Colors::PerPoint(vec![
                "rgba(54, 162, 235, 0.8)".into(),
                "rgba(255, 99, 132, 0.8)".into(),
            ])
        );
        assert_eq!(
            config.data.datasets[0].border_color,
            Colors::PerPoint(vec![
                "rgba(54, 162, 235, 1)".into(),
                "rgba(255, 99, 132, 1)".into(),
            ])
        );
    }
}
