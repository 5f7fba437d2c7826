// src/ui/page_init.rs

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::alerts::auto_dismiss_alerts;
use crate::render::{Element, ElementId, Page, Region};

pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_TOGGLE_CLASS: &str = "btn btn-sm btn-outline-secondary d-md-none";

// O que a inicialização da página deixou montado
pub struct PageInit {
    pub alert_timers: Vec<JoinHandle<()>>,
    pub tooltips: usize,
    pub sidebar: Option<SidebarToggle>,
}

/// Roda todos os ajustes genéricos da página uma única vez.
pub fn init_page(page: &Arc<Page>) -> PageInit {
    let alert_timers = auto_dismiss_alerts(page);
    let sidebar = install_sidebar_toggle(page);
    highlight_tables(page);
    let tooltips = activate_tooltips(page);

    tracing::debug!(
        "Página inicializada: {} alertas, {} tooltips",
        alert_timers.len(),
        tooltips
    );

    PageInit { alert_timers, tooltips, sidebar }
}

pub fn activate_tooltips(page: &Page) -> usize {
    let triggers = page.find_all(|e| {
        e.attributes.get("data-bs-toggle").map(String::as_str) == Some("tooltip")
    });
    for id in &triggers {
        page.activate_tooltip(*id);
    }
    triggers.len()
}

// Tabelas com linhas além do cabeçalho ganham destaque ao passar o mouse
pub fn highlight_tables(page: &Page) {
    for id in page.find_all(|e| e.tag == "table" && e.row_count > 1) {
        page.add_class(id, "table-hover");
    }
}

/// Botão de abrir/fechar a barra lateral (telas pequenas).
pub struct SidebarToggle {
    pub button: ElementId,
    sidebar: ElementId,
}

impl SidebarToggle {
    /// Devolve se a barra ficou visível.
    pub fn click(&self, page: &Page) -> bool {
        page.toggle_class(self.sidebar, "show")
    }
}

pub fn install_sidebar_toggle(page: &Page) -> Option<SidebarToggle> {
    let sidebar = page.find_by_id(SIDEBAR_ID)?;
    let button = page.prepend(
        Region::Body,
        Element::new("button")
            .with_class(SIDEBAR_TOGGLE_CLASS)
            .with_attr("type", "button")
            .with_text("☰"),
    );
    Some(SidebarToggle { button, sidebar })
}
