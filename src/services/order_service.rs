// src/services/order_service.rs

use crate::{
    api::{CatalogRepository, OrderRepository},
    common::error::AppError,
    models::{
        catalog::{Category, Product},
        orders::NewOrder,
    },
    services::cart::Cart,
};

// Guest-side ordering: read the menu, send the basket.
#[derive(Clone)]
pub struct OrderService {
    catalog_repo: CatalogRepository,
    order_repo: OrderRepository,
}

impl OrderService {
    pub fn new(catalog_repo: CatalogRepository, order_repo: OrderRepository) -> Self {
        Self {
            catalog_repo,
            order_repo,
        }
    }

    pub async fn load_menu(
        &self,
    ) -> (
        Result<Vec<Category>, AppError>,
        Result<Vec<Product>, AppError>,
    ) {
        tokio::join!(
            self.catalog_repo.list_categories(),
            self.catalog_repo.list_products()
        )
    }

    /// Posts the whole cart and returns the queue number.
    pub async fn place_order(&self, cart: &Cart, note: &str) -> Result<i64, AppError> {
        let order = NewOrder {
            items: cart.to_order_lines(),
            total: cart.total(),
            note: note.to_string(),
        };

        let receipt = self.order_repo.create_order(&order).await?;

        match (receipt.success, receipt.id) {
            (true, Some(queue)) => {
                tracing::info!(
                    "Order #{} placed: {} items, total {}",
                    queue,
                    cart.count(),
                    order.total
                );
                Ok(queue)
            }
            _ => Err(AppError::OrderRejected),
        }
    }
}
