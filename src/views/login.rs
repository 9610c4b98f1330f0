// src/views/login.rs

use crate::{
    common::error::AppError,
    models::auth::Credentials,
    services::AuthService,
    views::Navigation,
};

pub struct LoginView {
    auth_service: AuthService,
    pub form: Credentials,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new(auth_service: AuthService) -> Self {
        Self {
            auth_service,
            form: Credentials::default(),
            loading: false,
            error: None,
        }
    }

    pub async fn submit(&mut self) -> Navigation {
        self.loading = true;
        self.error = None;

        let result = self.auth_service.login(&self.form).await;
        self.loading = false;

        match result {
            Ok(()) => Navigation::Admin,
            Err(e) => {
                let message = match &e {
                    AppError::InvalidCredentials => "Invalid username or password".to_string(),
                    AppError::ValidationError(_) => "Username and password are required".to_string(),
                    AppError::Storage(_) => "Signed in, but the session could not be saved".to_string(),
                    AppError::Decode(_) => "Unexpected response from the server".to_string(),
                    _ => "Cannot reach the server".to_string(),
                };
                e.report("Login failed");
                self.error = Some(message);
                Navigation::Stay
            }
        }
    }
}
