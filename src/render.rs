// src/render.rs

use crate::{dashboard::activity::ActivityRow, models::chart::ChartConfig};

pub mod page;
pub use page::{Element, ElementId, Page, Region};

/// Identificador de uma superfície já localizada no documento.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub String);

impl SurfaceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Localiza as superfícies de desenho pelo identificador fixo do modelo da página.
pub trait SurfaceProvider: Send + Sync {
    fn chart_surface(&self, id: &str) -> Option<SurfaceId>;

    /// Corpo (tbody) da tabela com o id informado.
    fn table_body(&self, table_id: &str) -> Option<SurfaceId>;
}

// O colaborador que efetivamente desenha.
pub trait Renderer: Send + Sync {
    fn draw_chart(&self, surface: &SurfaceId, config: ChartConfig);

    /// Substitui todo o conteúdo do corpo da tabela.
    fn replace_rows(&self, body: &SurfaceId, rows: Vec<ActivityRow>);
}
