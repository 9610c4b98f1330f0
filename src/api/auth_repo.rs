// src/api/auth_repo.rs

use crate::{
    api::ApiClient,
    common::error::AppError,
    models::auth::{Credentials, LoginResponse},
};

#[derive(Clone)]
pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        self.client.post("/api/login", credentials).await
    }
}
