// src/ui/alerts.rs

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::notification::{dismiss_after, NOTIFICATION_TTL};
use crate::render::Page;

// Todo elemento `.alert` presente na carga da página fecha sozinho em 5s.
pub fn auto_dismiss_alerts(page: &Arc<Page>) -> Vec<JoinHandle<()>> {
    page.find_all(|e| e.has_class("alert"))
        .into_iter()
        .map(|id| dismiss_after(page, id, NOTIFICATION_TTL))
        .collect()
}
