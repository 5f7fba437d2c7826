// src/db/report_repo.rs

use crate::{
    db::SharedStore,
    models::inventory::{Movement, Product},
};

// Leituras consistentes do armazenamento para montar os relatórios.
#[derive(Clone)]
pub struct ReportRepository {
    store: SharedStore,
}

impl ReportRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn products(&self) -> Vec<Product> {
        self.store.read().await.products.clone()
    }

    /// Movimentações mais recentes primeiro, junto com o nome do produto.
    pub async fn recent_movements(&self, limit: usize) -> Vec<(Movement, String)> {
        let store = self.store.read().await;
        let mut movements: Vec<&Movement> = store.movements.iter().collect();
        movements.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        movements
            .into_iter()
            .take(limit)
            .map(|m| {
                let name = store
                    .products
                    .iter()
                    .find(|p| p.id == m.product_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| format!("Produto #{}", m.product_id));
                (m.clone(), name)
            })
            .collect()
    }

    pub async fn movements(&self) -> Vec<Movement> {
        self.store.read().await.movements.clone()
    }
}
