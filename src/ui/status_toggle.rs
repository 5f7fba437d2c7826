// src/ui/status_toggle.rs

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use super::notification::{show_notification, Severity};
use crate::{client::ReportApi, render::Page};

pub const RELOAD_DELAY: Duration = Duration::from_secs(1);
pub const TOGGLE_TRANSPORT_ERROR: &str = "Erro ao atualizar status do usuário";

#[derive(Debug)]
pub enum ToggleOutcome {
    // Sucesso: a página recarrega quando o temporizador terminar
    Toggled { reload: JoinHandle<()> },
    // O backend recusou a alteração
    Rejected,
    // Falha de transporte ou resposta ilegível
    Failed,
}

/// Alterna o status do usuário e informa o resultado com uma notificação.
pub async fn toggle_user_status<A>(api: &A, page: &Arc<Page>, user_id: i64) -> ToggleOutcome
where
    A: ReportApi + ?Sized,
{
    match api.toggle_user_status(user_id).await {
        Ok(response) if response.success => {
            show_notification(page, &response.message, Severity::Success);
            let page = Arc::clone(page);
            let reload = tokio::spawn(async move {
                tokio::time::sleep(RELOAD_DELAY).await;
                page.reload();
            });
            ToggleOutcome::Toggled { reload }
        }
        Ok(response) => {
            show_notification(page, &response.message, Severity::Danger);
            ToggleOutcome::Rejected
        }
        Err(e) => {
            show_notification(page, TOGGLE_TRANSPORT_ERROR, Severity::Danger);
            tracing::error!("Error: {}", e);
            ToggleOutcome::Failed
        }
    }
}
