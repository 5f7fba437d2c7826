// src/ui/confirm.rs

use crate::render::{ElementId, Page};

pub const CONFIRM_DELETE_ATTR: &str = "data-confirm-delete";
pub const CONFIRM_DELETE_MESSAGE: &str = "Tem certeza que deseja excluir este item?";

// Pergunta bloqueante de sim/não ao usuário.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Prompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Protege ações destrutivas marcadas com `data-confirm-delete`.
pub struct DeleteGuard<P> {
    prompt: P,
}

impl<P: Prompt> DeleteGuard<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Clique em `element`: a ação original só roda se não houver marcação
    /// ou se o usuário confirmar. Recusar devolve `None` sem efeito algum.
    pub fn on_click<T>(&self, page: &Page, element: ElementId, action: impl FnOnce() -> T) -> Option<T> {
        let guarded = page
            .element(element)
            .is_some_and(|e| e.attributes.contains_key(CONFIRM_DELETE_ATTR));

        if guarded && !self.prompt.confirm(CONFIRM_DELETE_MESSAGE) {
            tracing::debug!("Exclusão cancelada pelo usuário");
            return None;
        }
        Some(action())
    }
}
