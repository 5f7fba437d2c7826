// src/handlers/admin.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState};

// POST /admin/toggle_status/{id}
pub async fn toggle_status(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let response = app_state.user_service.toggle_status(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::Store, models::reports::ToggleStatusResponse};

    async fn call(user_id: i64) -> (StatusCode, ToggleStatusResponse) {
        let state = AppState::new(Store::seeded(chrono::Local::now().naive_local()).shared());
        let response = toggle_status(State(state), Path(user_id)).await.into_response();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unknown_user_answers_400_with_toggle_shape() {
        let (status, body) = call(99).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            ToggleStatusResponse { success: false, message: "Usuário não encontrado".into() }
        );
    }

    #[tokio::test]
    async fn known_user_answers_200() {
        let (status, body) = call(2).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.message, "Usuário desativado com sucesso!");
    }
}
