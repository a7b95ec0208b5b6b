//! HTTP implementation of [`ProductSource`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use market_core::{Product, ProductSubmission};

use super::error::{ClientError, ClientResult};
use super::ProductSource;
use crate::config::{ConfigError, StorefrontConfig};

/// REST client for the product backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> ClientResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ApiClient { http, base_url })
    }

    /// Builds a client from the configured origin and timeout.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, ConfigError> {
        let base_url = config.base_url()?;
        Self::new(base_url, config.request_timeout())
            .map_err(|e| ConfigError::Invalid(format!("HTTP client: {e}")))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        debug!(%method, %url, "API request");
        let builder = self.http.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Http(e)
            }
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, token: Option<&str>) -> ClientResult<T> {
        let response = self.send(self.request(Method::GET, url, token)).await?;
        Self::handle_response(response).await
    }

    async fn expect_success(&self, builder: RequestBuilder) -> ClientResult<()> {
        let response = self.send(builder).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::parse_error(response).await)
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()));
        }

        Err(Self::parse_error(response).await)
    }

    async fn parse_error(response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        ClientError::Status {
            status: status.as_u16(),
            message: error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "Request failed".to_string()),
        }
    }
}

/// Extracts the backend's `message` field, falling back to the raw body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        Err(_) => Some(body.to_string()),
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn approved_products(&self) -> ClientResult<Vec<Product>> {
        let url = self.endpoint(&["api", "products", "approved"])?;
        self.get(url, None).await
    }

    async fn pending_products(&self, token: &str) -> ClientResult<Vec<Product>> {
        let url = self.endpoint(&["api", "products", "pending"])?;
        self.get(url, Some(token)).await
    }

    async fn add_product(
        &self,
        token: &str,
        submission: &ProductSubmission,
    ) -> ClientResult<Product> {
        let url = self.endpoint(&["api", "products", "add"])?;
        let builder = self.request(Method::POST, url, Some(token)).json(submission);
        let response = self.send(builder).await?;
        Self::handle_response(response).await
    }

    async fn approve_product(&self, token: &str, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["api", "products", "approve", id])?;
        self.expect_success(self.request(Method::PUT, url, Some(token)))
            .await
    }

    async fn reject_product(&self, token: &str, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["api", "products", id])?;
        self.expect_success(self.request(Method::DELETE, url, Some(token)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client("http://localhost:5000");
        assert_eq!(
            api.endpoint(&["api", "products", "approved"]).unwrap().as_str(),
            "http://localhost:5000/api/products/approved"
        );

        let api = client("https://shop.example.com/backend/");
        assert_eq!(
            api.endpoint(&["api", "products", "pending"]).unwrap().as_str(),
            "https://shop.example.com/backend/api/products/pending"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let api = client("http://localhost:5000");
        let url = api.endpoint(&["api", "products", "approve", "a/b c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/products/approve/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        let url = Url::parse("mailto:shop@example.com").unwrap();
        assert!(matches!(
            ApiClient::new(url, Duration::from_secs(1)),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = StorefrontConfig::default();
        let api = ApiClient::from_config(&config).unwrap();
        assert_eq!(api.base_url().as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Product not found"}"#).as_deref(),
            Some("Product not found")
        );
        assert_eq!(error_message("Bad gateway").as_deref(), Some("Bad gateway"));
        assert_eq!(error_message("  "), None);
    }
}
