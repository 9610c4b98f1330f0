// src/api/catalog_repo.rs

use crate::{
    api::ApiClient,
    common::error::AppError,
    models::catalog::{Category, NewCategory, NewProduct, Product},
};

// Categories and products: the menu guests order from.
#[derive(Clone)]
pub struct CatalogRepository {
    client: ApiClient,
}

impl CatalogRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // --- Categories ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.client.get("/api/categories").await
    }

    pub async fn create_category(&self, name: &str) -> Result<(), AppError> {
        let body = NewCategory {
            name: name.to_string(),
        };
        self.client.post_unit("/api/categories", &body).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/api/categories/{}", id)).await
    }

    // --- Products ---

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.client.get("/api/products").await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<(), AppError> {
        self.client.post_unit("/api/products", product).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/api/products/{}", id)).await
    }
}
