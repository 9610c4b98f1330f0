// src/api/order_repo.rs

use crate::{
    api::ApiClient,
    common::error::AppError,
    models::orders::{NewOrder, Order, OrderReceipt},
};

#[derive(Clone)]
pub struct OrderRepository {
    client: ApiClient,
}

impl OrderRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.client.get("/api/orders").await
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<OrderReceipt, AppError> {
        self.client.post("/api/orders", order).await
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/api/orders/{}", id)).await
    }
}
