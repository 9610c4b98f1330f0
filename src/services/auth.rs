// src/services/auth.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    api::AuthRepository,
    common::{error::AppError, storage::TokenStore},
    models::auth::Credentials,
};

#[derive(Clone)]
pub struct AuthService {
    auth_repo: AuthRepository,
    tokens: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(auth_repo: AuthRepository, tokens: Arc<dyn TokenStore>) -> Self {
        Self { auth_repo, tokens }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        // 1. Both fields are required before anything goes over the wire
        credentials.validate()?;

        // 2. The backend answers { success, token }, whatever the status code
        let response = self.auth_repo.login(credentials).await?;

        let token = match (response.success, response.token) {
            (true, Some(token)) if !token.is_empty() => token,
            _ => return Err(AppError::InvalidCredentials),
        };

        // 3. Persist it for the admin calls
        self.tokens.save(&token)?;
        tracing::info!("Signed in as {}", credentials.username);
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.tokens.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.load().is_some_and(|t| !t.is_empty())
    }
}
