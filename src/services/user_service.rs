// src/services/user_service.rs

use crate::{common::error::AppError, db::UserRepository, models::reports::ToggleStatusResponse};

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn toggle_status(&self, user_id: i64) -> Result<ToggleStatusResponse, AppError> {
        let user = self.repo.toggle_active(user_id).await?;
        let status = if user.active { "ativado" } else { "desativado" };

        tracing::info!("🔁 Usuário {} {}", user.username, status);

        Ok(ToggleStatusResponse {
            success: true,
            message: format!("Usuário {} com sucesso!", status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    #[tokio::test]
    async fn toggling_twice_restores_the_user() {
        let store = Store::seeded(chrono::Local::now().naive_local()).shared();
        let service = UserService::new(UserRepository::new(store));

        let first = service.toggle_status(2).await.unwrap();
        assert_eq!(first.message, "Usuário desativado com sucesso!");

        let second = service.toggle_status(2).await.unwrap();
        assert_eq!(second.message, "Usuário ativado com sucesso!");
    }

    #[tokio::test]
    async fn unknown_user_is_an_error() {
        let store = Store::default().shared();
        let service = UserService::new(UserRepository::new(store));
        assert!(matches!(service.toggle_status(99).await, Err(AppError::UserNotFound)));
    }
}
