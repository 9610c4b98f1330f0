// src/api/sales_repo.rs

use crate::{api::ApiClient, common::error::AppError, models::sales::DailySales};

#[derive(Clone)]
pub struct SalesRepository {
    client: ApiClient,
}

impl SalesRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn daily_sales(&self) -> Result<Vec<DailySales>, AppError> {
        self.client.get("/api/daily-sales").await
    }
}
