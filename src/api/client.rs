use reqwest::{header::HeaderMap, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiEnvelope, ApiError},
    config,
    utils::storage,
};

/// Thin HTTP client over the backend API. Pure request/response plumbing:
/// it never owns session state, but it does evict a rejected session from
/// durable storage when the backend answers 401.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = storage::read_access_token()
            .ok_or_else(|| ApiError::new("Not authenticated"))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::new("Invalid token format"))?,
        );
        Ok(headers)
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Session rejected by backend, clearing stored tokens");
            storage::clear_tokens();
            Self::redirect_to_login_if_needed();
        }
    }

    // Hosts have no window to redirect; wasm-bindgen imports abort on
    // non-wasm targets, so the browser redirect is gated to wasm builds.
    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authed: bool,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .client
            .request(method, format!("{}{}", base_url, path));
        if authed {
            request = request.headers(self.auth_headers()?);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(ApiError::network)?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        let envelope: ApiEnvelope<T> = response.json().await.map_err(ApiError::decode)?;
        if status.is_success() && envelope.success {
            envelope
                .data
                .ok_or_else(|| ApiError::decode("envelope missing data"))
        } else {
            let err = ApiError::from_envelope(envelope.message, envelope.errors);
            if status == StatusCode::UNAUTHORIZED {
                Err(err.into_unauthorized())
            } else {
                Err(err)
            }
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None, true).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, path, Some(body), true).await
    }

    pub(crate) async fn post_public<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, path, Some(body), false).await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        self.send(Method::PATCH, path, Some(body), true).await
    }

    /// For endpoints whose envelope carries no payload worth keeping.
    pub(crate) async fn post_empty(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}{}", base_url, path))
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            let envelope: Result<ApiEnvelope<Value>, _> = response.json().await;
            let err = envelope
                .map(|e| ApiError::from_envelope(e.message, e.errors))
                .unwrap_or_else(|_| ApiError::new("Request failed"));
            if status == StatusCode::UNAUTHORIZED {
                Err(err.into_unauthorized())
            } else {
                Err(err)
            }
        }
    }
}
