use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, AuthData, Identity, LoginRequest, RegisterRequest},
};
use crate::utils::storage;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthData, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        self.post_public("/auth/login", &body).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthData, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        self.post_public("/auth/register", &body).await
    }

    pub async fn get_me(&self) -> Result<Identity, ApiError> {
        self.get("/auth/me").await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let body = match storage::read_tokens() {
            (_, Some(refresh)) => json!({ "refreshToken": refresh }),
            _ => json!({}),
        };
        self.post_empty("/auth/logout", &body).await
    }
}
