// src/config.rs

use std::env;

use crate::{
    db::{ReportRepository, SharedStore, Store, UserRepository},
    services::{ReportService, UserService},
};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

// Configuração lida do ambiente (com .env opcional)
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: String,
    pub base_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            base_url: env::var("DASHBOARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(store.clone());
        let report_repo = ReportRepository::new(store);

        Self {
            report_service: ReportService::new(user_repo.clone(), report_repo),
            user_service: UserService::new(user_repo),
        }
    }

    /// Estado com o armazenamento em memória já populado.
    pub fn seeded() -> Self {
        let store = Store::seeded(chrono::Local::now().naive_local()).shared();
        tracing::info!("✅ Armazenamento em memória populado com dados iniciais");
        Self::new(store)
    }
}
