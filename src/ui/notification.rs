// src/ui/notification.rs

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::render::{Element, ElementId, Page, Region};

// Tempo de vida de qualquer alerta descartável
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

pub struct Notification {
    pub id: ElementId,
    pub expiry: JoinHandle<()>,
}

impl Notification {
    /// Botão de fechar do alerta; `false` se ele já tinha saído da página.
    pub fn close(&self, page: &Page) -> bool {
        page.remove(self.id)
    }
}

/// Insere um alerta no topo de <main> (ou do <body>) e agenda sua remoção.
pub fn show_notification(page: &Arc<Page>, message: &str, severity: Severity) -> Notification {
    let banner = Element::new("div")
        .with_class(&format!("alert alert-{} alert-dismissible fade show", severity.as_str()))
        .with_attr("role", "alert")
        .with_text(message);

    let id = page.prepend(Region::Main, banner);
    tracing::debug!("🔔 Notificação [{}]: {}", severity.as_str(), message);

    Notification {
        id,
        expiry: dismiss_after(page, id, NOTIFICATION_TTL),
    }
}

// Remove o elemento após `delay`; se já foi fechado à mão, não faz nada.
pub fn dismiss_after(page: &Arc<Page>, id: ElementId, delay: Duration) -> JoinHandle<()> {
    let page = Arc::clone(page);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        page.remove(id);
    })
}
