use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::reports::ToggleStatusResponse;

// Erros do backend de relatórios.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usuário não encontrado")]
    UserNotFound,
}

// Falhas respondem 400 no mesmo formato JSON do sucesso,
// para que o painel sempre consiga ler `success` e `message`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!("Requisição recusada: {}", self);

        let body = Json(ToggleStatusResponse {
            success: false,
            message: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
