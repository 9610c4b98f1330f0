//! Client side of the cafe point-of-sale: guest ordering, admin dashboard,
//! login, and the stand-alone nail studio back office.

pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod views;

pub use common::error::{AppError, ErrorOutcome};
pub use config::{AppConfig, AppState};
