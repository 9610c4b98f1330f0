// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// Login form / POST /api/login body
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
}
