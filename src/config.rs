// src/config.rs

use std::{env, path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use chrono::FixedOffset;

use crate::{
    api::{ApiClient, AuthRepository, CatalogRepository, OrderRepository, SalesRepository},
    common::storage::{LocalStorage, TokenStore},
    services::{AuthService, DashboardService, OrderService},
    views::{AdminDashboard, GuestOrderView, LoginView},
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
    pub storage_file: PathBuf,
    pub utc_offset: FixedOffset,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            poll_interval: Duration::from_secs(3),
            http_timeout: Duration::from_secs(10),
            storage_file: PathBuf::from(".cafe-pos/storage.json"),
            // Asia/Bangkok
            utc_offset: FixedOffset::east_opt(7 * 3600).expect("UTC+7 is a valid offset"),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{} has an invalid value '{}': {}", name, raw, e)),
        _ => Ok(None),
    }
}

impl AppConfig {
    /// Reads `.env` (when present) and the `CAFE_*` variables on top of the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`], with variables taken from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("CAFE_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url.trim().to_string();
            }
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "CAFE_POLL_INTERVAL_SECS")? {
            anyhow::ensure!(secs > 0, "CAFE_POLL_INTERVAL_SECS must be at least 1");
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "CAFE_HTTP_TIMEOUT_SECS")? {
            anyhow::ensure!(secs > 0, "CAFE_HTTP_TIMEOUT_SECS must be at least 1");
            config.http_timeout = Duration::from_secs(secs);
        }
        if let Some(path) = parse_var::<PathBuf>(&lookup, "CAFE_STORAGE_FILE")? {
            config.storage_file = path;
        }
        if let Some(hours) = parse_var::<i32>(&lookup, "CAFE_UTC_OFFSET_HOURS")? {
            config.utc_offset = hours
                .checked_mul(3600)
                .and_then(FixedOffset::east_opt)
                .with_context(|| format!("CAFE_UTC_OFFSET_HOURS out of range: {}", hours))?;
        }

        Ok(config)
    }
}

// Everything the screens need, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub tokens: Arc<dyn TokenStore>,
    pub auth_service: AuthService,
    pub order_service: OrderService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let tokens: Arc<dyn TokenStore> = Arc::new(LocalStorage::new(&config.storage_file));
        Self::with_token_store(config, tokens)
    }

    pub fn with_token_store(config: AppConfig, tokens: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        // --- Build the dependency graph ---
        let public_client = ApiClient::new(&config.api_url, config.http_timeout, tokens.clone())
            .context("Failed to build the HTTP client")?;
        let admin_client = public_client.as_admin();

        let auth_service = AuthService::new(AuthRepository::new(public_client.clone()), tokens.clone());
        let order_service = OrderService::new(
            CatalogRepository::new(public_client.clone()),
            OrderRepository::new(public_client),
        );
        let dashboard_service = DashboardService::new(
            CatalogRepository::new(admin_client.clone()),
            OrderRepository::new(admin_client.clone()),
            SalesRepository::new(admin_client),
        );

        tracing::debug!("Backend at {}", config.api_url);

        Ok(Self {
            config,
            tokens,
            auth_service,
            order_service,
            dashboard_service,
        })
    }

    pub fn login_view(&self) -> LoginView {
        LoginView::new(self.auth_service.clone())
    }

    pub fn guest_view(&self) -> GuestOrderView {
        GuestOrderView::new(self.order_service.clone())
    }

    pub fn admin_view(&self) -> AdminDashboard {
        AdminDashboard::new(
            self.dashboard_service.clone(),
            self.auth_service.clone(),
            self.config.utc_offset,
        )
    }
}
