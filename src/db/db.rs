// src/db/db.rs

use chrono::{Duration, NaiveDateTime};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{
    auth::{Role, User},
    inventory::{Movement, MovementKind, Product},
};

// O armazenamento em memória compartilhado pelos repositórios.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub movements: Vec<Movement>,
}

pub type SharedStore = Arc<RwLock<Store>>;

impl Store {
    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Dados iniciais: os dois usuários padrão e uma amostra de estoque
    /// com movimentações nos últimos dias a partir de `now`.
    pub fn seeded(now: NaiveDateTime) -> Self {
        let users = vec![
            User {
                id: 1,
                username: "admin".into(),
                email: "admin@wms.com".into(),
                name: "Administrador".into(),
                role: Role::Admin,
                active: true,
                created_at: now,
            },
            User {
                id: 2,
                username: "user".into(),
                email: "user@wms.com".into(),
                name: "Usuário Teste".into(),
                role: Role::User,
                active: true,
                created_at: now,
            },
        ];

        let catalog = [
            ("NB-001", "Notebook Dell XPS 15", "Eletrônicos", 42),
            ("MS-002", "Mouse Logitech MX Master", "Eletrônicos", 85),
            ("CM-003", "Camiseta Básica", "Roupas", 60),
            ("AL-004", "Café em Grãos 1kg", "Alimentos", 33),
            ("MV-005", "Cadeira de Escritório", "Móveis", 21),
            ("FR-006", "Furadeira de Impacto", "Ferramentas", 47),
        ];
        let products = catalog
            .iter()
            .enumerate()
            .map(|(i, (code, name, category, quantity))| Product {
                id: i as i64 + 1,
                code: (*code).into(),
                name: (*name).into(),
                category: (*category).into(),
                quantity: *quantity,
            })
            .collect();

        // (produto, tipo, quantidade, dias atrás, horas atrás)
        let history = [
            (1, MovementKind::Entrada, 10, 6, 2),
            (2, MovementKind::Saida, 5, 5, 4),
            (3, MovementKind::Entrada, 15, 4, 1),
            (5, MovementKind::Saida, 3, 3, 6),
            (4, MovementKind::Entrada, 8, 2, 3),
            (6, MovementKind::Ajuste, -2, 1, 5),
            (2, MovementKind::Entrada, 20, 0, 1),
        ];
        let movements = history
            .iter()
            .enumerate()
            .map(|(i, (product_id, kind, quantity, days, hours))| Movement {
                id: i as i64 + 1,
                product_id: *product_id,
                kind: *kind,
                quantity: *quantity,
                user_id: 1,
                created_at: now - Duration::days(*days) - Duration::hours(*hours),
            })
            .collect();

        Self { users, products, movements }
    }
}
