// src/dashboard/palette.rs

// Tabelas ordenadas de rótulos e cores. A posição de cada entrada é um
// contrato com a ordem dos dados enviados pelo backend.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

pub const SUCCESS: Rgb = Rgb(40, 167, 69);
pub const WARNING: Rgb = Rgb(255, 193, 7);
pub const DANGER: Rgb = Rgb(220, 53, 69);

pub const FILL_ALPHA: f32 = 0.8;
pub const AREA_ALPHA: f32 = 0.2;
pub const BORDER_ALPHA: f32 = 1.0;
pub const BORDER_WIDTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub color: Rgb,
}

// --- 1. Gráfico de rosca de usuários ---
// Ordem dos dados: [active, inactive, admins]
pub const USER_STATUS_SEGMENTS: [Segment; 3] = [
    Segment { label: "Ativos", color: SUCCESS },
    Segment { label: "Inativos", color: WARNING },
    Segment { label: "Administradores", color: DANGER },
];
pub const USER_STATS_DATASET_LABEL: &str = "Usuários";
pub const USER_STATS_TITLE_PREFIX: &str = "Total de Usuários: ";

pub fn user_stats_title(total: u64) -> String {
    format!("{USER_STATS_TITLE_PREFIX}{total}")
}

// --- 2. Gráfico de linhas de movimentações ---
// Ordem das séries: [entries, exits]
pub const MOVEMENT_SERIES: [Segment; 2] = [
    Segment { label: "Entradas", color: SUCCESS },
    Segment { label: "Saídas", color: DANGER },
];
pub const MOVEMENT_TENSION: f64 = 0.4;
pub const MOVEMENT_STEP: u32 = 10;

// --- 3. Gráfico de barras por categoria ---
pub const CATEGORY_PALETTE: [Rgb; 6] = [
    Rgb(54, 162, 235),
    Rgb(255, 99, 132),
    Rgb(255, 206, 86),
    Rgb(75, 192, 192),
    Rgb(153, 102, 255),
    Rgb(255, 159, 64),
];
pub const CATEGORY_DATASET_LABEL: &str = "Quantidade em Estoque";
pub const CATEGORY_STEP: u32 = 20;

/// Cor da barra `index`, reaproveitando a paleta em ciclo.
pub fn category_color(index: usize) -> Rgb {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

// --- 4. Selos da tabela de atividades ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeClass {
    Success,
    Danger,
    Warning,
    Secondary,
}

impl BadgeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeClass::Success => "success",
            BadgeClass::Danger => "danger",
            BadgeClass::Warning => "warning",
            BadgeClass::Secondary => "secondary",
        }
    }
}

pub const BADGE_CLASSES: [(&str, BadgeClass); 3] = [
    ("Entrada", BadgeClass::Success),
    ("Saída", BadgeClass::Danger),
    ("Ajuste", BadgeClass::Warning),
];

pub fn badge_for(kind: &str) -> BadgeClass {
    BADGE_CLASSES
        .iter()
        .find(|(label, _)| *label == kind)
        .map(|(_, badge)| *badge)
        .unwrap_or(BadgeClass::Secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_formats_like_css() {
        assert_eq!(SUCCESS.rgba(FILL_ALPHA), "rgba(40, 167, 69, 0.8)");
        assert_eq!(DANGER.rgba(BORDER_ALPHA), "rgba(220, 53, 69, 1)");
        assert_eq!(DANGER.rgba(AREA_ALPHA), "rgba(220, 53, 69, 0.2)");
    }

    #[test]
    fn category_colors_cycle() {
        assert_eq!(category_color(0), Rgb(54, 162, 235));
        assert_eq!(category_color(6), category_color(0));
        assert_eq!(category_color(13), category_color(1));
    }

    #[test]
    fn unknown_activity_types_are_secondary() {
        assert_eq!(badge_for("Entrada"), BadgeClass::Success);
        assert_eq!(badge_for("Saída"), BadgeClass::Danger);
        assert_eq!(badge_for("Ajuste"), BadgeClass::Warning);
        assert_eq!(badge_for("Transferência"), BadgeClass::Secondary);
        assert_eq!(badge_for("entrada"), BadgeClass::Secondary);
    }
}
