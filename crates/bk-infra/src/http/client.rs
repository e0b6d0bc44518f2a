use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use bk_core::onboarding::AckResponse;
use bk_core::ports::{ApiError, TokenKey, TokenStorePort};

pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/auth/login";
    pub const AUTH_REGISTER: &str = "/auth/register";
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    pub const AUTH_ME: &str = "/auth/me";

    pub const ONBOARDING_BUSINESS: &str = "/onboarding/business";
    pub const ONBOARDING_GOALS: &str = "/onboarding/goals";
    pub const ONBOARDING_INCOME_EXPENSE: &str = "/onboarding/income-expense";
    pub const ONBOARDING_COMPLETE: &str = "/onboarding/complete";

    pub const DASHBOARD_SUMMARY: &str = "/dashboard/summary";
    pub const DASHBOARD_CASH_FLOW: &str = "/dashboard/cash-flow";
    pub const DASHBOARD_HEALTH_STATUS: &str = "/dashboard/health-status";
    pub const DASHBOARD_RECOMMENDATIONS: &str = "/dashboard/recommendations";
}

/// JSON-over-HTTP client carrying the stored bearer token on every request.
#[derive(Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
    token_store: Arc<dyn TokenStorePort>,
}

impl HttpApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        token_store: Arc<dyn TokenStorePort>,
    ) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout.max(Duration::from_millis(1)))
            .build()
            .context("failed to create backend http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token_store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.token_store.get(TokenKey::AccessToken) {
            Ok(Some(token)) => builder.bearer_auth(token.expose()),
            Ok(None) => builder,
            Err(err) => {
                warn!(error = %err, "failed to read access token, sending request without it");
                builder
            }
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.send(Method::GET, path, builder).await?;
        decode_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(Method::POST, path, builder).await?;
        decode_json(response).await
    }

    /// POST a JSON body; any 2xx counts as acknowledged.
    pub(crate) async fn post_json_ack<B>(&self, path: &str, body: &B) -> Result<AckResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(Method::POST, path, builder).await?;
        Ok(read_ack(path, response).await)
    }

    /// POST without a body; any 2xx counts as acknowledged.
    pub(crate) async fn post_empty_ack(&self, path: &str) -> Result<AckResponse, ApiError> {
        let builder = self.request(Method::POST, path);
        let response = self.send(Method::POST, path, builder).await?;
        Ok(read_ack(path, response).await)
    }

    /// POST without a body, ignoring any success payload.
    pub(crate) async fn post_discard(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, path);
        self.send(Method::POST, path, builder).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|err| {
            warn!(%method, path, error = %err, "backend request failed");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "backend response");
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best-effort; a missing or non-JSON body just means no message.
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// The status already said yes; the body only adds detail when it parses.
async fn read_ack(path: &str, response: Response) -> AckResponse {
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return AckResponse {
            success: true,
            message: String::new(),
        };
    }
    serde_json::from_str(&body).unwrap_or_else(|err| {
        debug!(path, error = %err, "acknowledgement body not understood, treating as success");
        AckResponse {
            success: true,
            message: String::new(),
        }
    })
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_message_reads_json_message_field() {
        assert_eq!(
            extract_message(r#"{"message": "Email already registered"}"#),
            Some("Email already registered".to_string())
        );
        assert_eq!(extract_message(r#"{"detail": "nope"}"#), None);
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"message": ""}"#), None);
    }
}
