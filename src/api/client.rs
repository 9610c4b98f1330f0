// src/api/client.rs

use std::{sync::Arc, time::Duration};

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::common::{error::AppError, storage::TokenStore};

/// Who is calling: a guest (no credentials) or the signed-in admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Admin,
}

// Shared HTTP handle, cloned into every repository the way a pool would be.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    access: Access,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            access: Access::Public,
        })
    }

    /// Same connection pool, but every call carries the stored bearer token.
    pub fn as_admin(&self) -> Self {
        Self {
            access: Access::Admin,
            ..self.clone()
        }
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // --- Sending ---

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        match self.access {
            Access::Public => Ok(request.send().await?),
            Access::Admin => {
                let token = self
                    .tokens
                    .load()
                    .filter(|t| !t.is_empty())
                    .ok_or(AppError::Unauthorized)?;

                let response = request.bearer_auth(token).send().await?;

                if response.status() == StatusCode::UNAUTHORIZED {
                    tracing::warn!("Backend rejected the admin token, signing out");
                    if let Err(e) = self.tokens.clear() {
                        tracing::error!("Could not clear the stored token: {}", e);
                    }
                    return Err(AppError::Unauthorized);
                }
                Ok(response)
            }
        }
    }

    async fn ensure_success(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // --- Verbs used by the repositories ---

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        let response = Self::ensure_success(response).await?;
        Self::decode(response).await
    }

    /// POST whose reply body matters. The body is decoded whatever the status,
    /// since the backend reports failures as `{ "success": false }`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// POST whose reply body is ignored; only the status is checked.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.send(self.http.delete(self.url(path))).await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
