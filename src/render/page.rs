// src/render/page.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Renderer, SurfaceId, SurfaceProvider};
use crate::{dashboard::activity::ActivityRow, models::chart::ChartConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

// Onde um elemento de topo vive: dentro de <main> ou direto no <body>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Main,
    Body,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub dom_id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    // Linhas da tabela, contando o cabeçalho
    pub row_count: usize,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.dom_id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        for c in class.split_whitespace() {
            self.classes.insert(c.to_string());
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.row_count = rows;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn class_name(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Default)]
struct Document {
    next_id: u64,
    elements: BTreeMap<ElementId, Element>,
    has_main: bool,
    main: Vec<ElementId>,
    body: Vec<ElementId>,
    charts: HashMap<String, Vec<ChartConfig>>,
    table_bodies: HashMap<String, Vec<ActivityRow>>,
    tooltips: BTreeSet<ElementId>,
    reloads: usize,
}

/// Documento em memória. Guarda os elementos da página, os gráficos
/// desenhados e as linhas de tabela, e conta os recarregamentos.
#[derive(Debug, Default)]
pub struct Page {
    doc: Mutex<Document>,
}

impl Page {
    /// Página vazia, sem região <main>.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_main() -> Self {
        let page = Self::new();
        page.lock().has_main = true;
        page
    }

    /// A página de relatórios com as quatro superfícies do painel.
    pub fn reports_template() -> Self {
        let page = Self::with_main();
        page.append(Region::Main, Element::new("canvas").with_id("userStatsChart"));
        page.append(Region::Main, Element::new("canvas").with_id("stockMovementsChart"));
        page.append(Region::Main, Element::new("canvas").with_id("stockCategoryChart"));
        page.append(
            Region::Main,
            Element::new("table").with_id("activitiesTable").with_class("table").with_rows(1),
        );
        page
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        self.doc.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, region: Region, element: Element) -> ElementId {
        self.insert(region, element, false)
    }

    pub fn prepend(&self, region: Region, element: Element) -> ElementId {
        self.insert(region, element, true)
    }

    fn insert(&self, region: Region, element: Element, at_top: bool) -> ElementId {
        let mut doc = self.lock();
        doc.next_id += 1;
        let id = ElementId(doc.next_id);
        doc.elements.insert(id, element);

        // Sem <main>, tudo vai para o <body>
        let children = match region {
            Region::Main if doc.has_main => &mut doc.main,
            _ => &mut doc.body,
        };
        if at_top {
            children.insert(0, id);
        } else {
            children.push(id);
        }
        id
    }

    /// Remove o elemento; `false` se ele já não estava no documento.
    pub fn remove(&self, id: ElementId) -> bool {
        let mut doc = self.lock();
        if doc.elements.remove(&id).is_none() {
            return false;
        }
        doc.main.retain(|e| *e != id);
        doc.body.retain(|e| *e != id);
        doc.tooltips.remove(&id);
        true
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.lock().elements.contains_key(&id)
    }

    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.lock().elements.get(&id).cloned()
    }

    pub fn children(&self, region: Region) -> Vec<ElementId> {
        let doc = self.lock();
        match region {
            Region::Main if doc.has_main => doc.main.clone(),
            _ => doc.body.clone(),
        }
    }

    pub fn find_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.lock()
            .elements
            .iter()
            .find(|(_, e)| e.dom_id.as_deref() == Some(dom_id))
            .map(|(id, _)| *id)
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        self.lock()
            .elements
            .iter()
            .filter(|(_, e)| predicate(e))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn add_class(&self, id: ElementId, class: &str) {
        if let Some(element) = self.lock().elements.get_mut(&id) {
            element.classes.insert(class.to_string());
        }
    }

    /// Alterna a classe e devolve se ela ficou presente.
    pub fn toggle_class(&self, id: ElementId, class: &str) -> bool {
        let mut doc = self.lock();
        let Some(element) = doc.elements.get_mut(&id) else {
            return false;
        };
        if element.classes.remove(class) {
            false
        } else {
            element.classes.insert(class.to_string());
            true
        }
    }

    pub fn activate_tooltip(&self, id: ElementId) {
        self.lock().tooltips.insert(id);
    }

    pub fn tooltip_active(&self, id: ElementId) -> bool {
        self.lock().tooltips.contains(&id)
    }

    pub fn reload(&self) {
        let mut doc = self.lock();
        doc.reloads += 1;
        tracing::info!("🔄 Página recarregada ({}x)", doc.reloads);
    }

    pub fn reload_count(&self) -> usize {
        self.lock().reloads
    }

    /// Todas as configurações entregues à superfície, na ordem de desenho.
    pub fn charts_drawn(&self, surface_id: &str) -> Vec<ChartConfig> {
        self.lock().charts.get(surface_id).cloned().unwrap_or_default()
    }

    pub fn table_rows(&self, table_id: &str) -> Vec<ActivityRow> {
        self.lock().table_bodies.get(table_id).cloned().unwrap_or_default()
    }
}

impl SurfaceProvider for Page {
    fn chart_surface(&self, id: &str) -> Option<SurfaceId> {
        let doc = self.lock();
        doc.elements
            .values()
            .any(|e| e.tag == "canvas" && e.dom_id.as_deref() == Some(id))
            .then(|| SurfaceId(id.to_string()))
    }

    fn table_body(&self, table_id: &str) -> Option<SurfaceId> {
        let doc = self.lock();
        doc.elements
            .values()
            .any(|e| e.tag == "table" && e.dom_id.as_deref() == Some(table_id))
            .then(|| SurfaceId(table_id.to_string()))
    }
}

impl Renderer for Page {
    fn draw_chart(&self, surface: &SurfaceId, config: ChartConfig) {
        self.lock()
            .charts
            .entry(surface.as_str().to_string())
            .or_default()
            .push(config);
    }

    fn replace_rows(&self, body: &SurfaceId, rows: Vec<ActivityRow>) {
        let mut doc = self.lock();
        let row_count = rows.len() + 1;
        if let Some(table) = doc
            .elements
            .values_mut()
            .find(|e| e.dom_id.as_deref() == Some(body.as_str()))
        {
            table.row_count = row_count;
        }
        doc.table_bodies.insert(body.as_str().to_string(), rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_goes_to_body_when_there_is_no_main() {
        let page = Page::new();
        let first = page.append(Region::Body, Element::new("p"));
        let banner = page.prepend(Region::Main, Element::new("div"));

        assert_eq!(page.children(Region::Body), vec![banner, first]);
    }

    #[test]
    fn prepend_inserts_at_the_top_of_main() {
        let page = Page::with_main();
        let first = page.append(Region::Main, Element::new("p"));
        let banner = page.prepend(Region::Main, Element::new("div"));

        assert_eq!(page.children(Region::Main), vec![banner, first]);
        assert!(page.children(Region::Body).is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let page = Page::new();
        let id = page.append(Region::Body, Element::new("div"));
        assert!(page.remove(id));
        assert!(!page.remove(id));
        assert!(!page.contains(id));
    }

    #[test]
    fn template_exposes_the_dashboard_surfaces() {
        let page = Page::reports_template();
        assert!(page.chart_surface("userStatsChart").is_some());
        assert!(page.chart_surface("stockMovementsChart").is_some());
        assert!(page.chart_surface("stockCategoryChart").is_some());
        assert!(page.table_body("activitiesTable").is_some());
        // Uma tabela não é uma superfície de gráfico
        assert!(page.chart_surface("activitiesTable").is_none());
    }

    #[test]
    fn toggle_class_flips_presence() {
        let page = Page::new();
        let id = page.append(Region::Body, Element::new("nav").with_id("sidebar"));
        assert!(page.toggle_class(id, "show"));
        assert!(page.element(id).unwrap().has_class("show"));
        assert!(!page.toggle_class(id, "show"));
    }
}
