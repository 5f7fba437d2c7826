// src/db/user_repo.rs

use crate::{common::error::AppError, db::SharedStore, models::auth::User};

// O repositório de usuários, responsável pelas interações com a lista 'users'
#[derive(Clone)]
pub struct UserRepository {
    store: SharedStore,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Vec<User> {
        self.store.read().await.users.clone()
    }

    // Inverte o status de um usuário e devolve o novo estado
    pub async fn toggle_active(&self, id: i64) -> Result<User, AppError> {
        let mut store = self.store.write().await;
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound)?;
        user.active = !user.active;
        Ok(user.clone())
    }
}
