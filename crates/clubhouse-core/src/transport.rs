//! HTTP transport shared by every resource client.
//!
//! Each request carries `Content-Type: application/json` and the configured
//! bearer credential. Non-2xx answers are folded into [`Error::Request`] with
//! the backend's `message` when it sent one.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
pub use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{normalize_base_url, ApiConfig};
use crate::error::{Error, Result};
use crate::util::compact_text;

/// Successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    pub fn into_json(self) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(body) => Err(Error::Decode(format!(
                "expected a JSON body, got text: {}",
                compact_text(&body)
            ))),
        }
    }

    /// Decodes a JSON body into `T`, naming `what` in the error on mismatch.
    pub fn decode<T: DeserializeOwned>(self, what: &str) -> Result<T> {
        let value = self.into_json()?;
        serde_json::from_value(value).map_err(|error| Error::Decode(format!("{what}: {error}")))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub body: Option<Value>,
    /// Extra headers; each one replaces the default with the same name.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Ok(Self {
            body: Some(serde_json::to_value(body)?),
            headers: Vec::new(),
        })
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Value,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    bearer_token: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self {
            base_url,
            bearer_token: config.bearer_token.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issues one request and normalizes its outcome.
    ///
    /// Failures are logged with method and URL before being returned.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let url = self.url(endpoint);
        match self.send(method.clone(), &url, options).await {
            Ok(response) => Ok(response),
            Err(error) => {
                tracing::error!(method = %method, url = %url, "API request failed: {error}");
                Err(error)
            }
        }
    }

    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse> {
        self.request(Method::GET, endpoint, RequestOptions::default())
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse> {
        self.request(Method::POST, endpoint, RequestOptions::json(body)?)
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse> {
        self.request(Method::PUT, endpoint, RequestOptions::json(body)?)
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, endpoint, RequestOptions::default())
            .await
    }

    /// Sends a bare GET and reports whether the answer was 2xx.
    ///
    /// Only network-level failures are errors; the body is never read.
    pub async fn probe(&self, endpoint: &str) -> Result<bool> {
        let response = self
            .client
            .get(self.url(endpoint))
            .headers(self.headers_with(&[])?)
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    async fn send(&self, method: Method, url: &str, options: RequestOptions) -> Result<ApiResponse> {
        let mut request = self
            .client
            .request(method, url)
            .headers(self.headers_with(&options.headers)?);
        if let Some(body) = options.body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::request(
                Some(status.as_u16()),
                parse_error_message(status.as_u16(), &body),
            ));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("application/json"));
        let body = response.text().await?;
        if !is_json {
            return Ok(ApiResponse::Text(body));
        }
        if body.trim().is_empty() {
            return Ok(ApiResponse::Json(Value::Null));
        }
        serde_json::from_str(&body)
            .map(ApiResponse::Json)
            .map_err(|error| Error::Decode(format!("invalid JSON body: {error}")))
    }

    fn headers_with(&self, overrides: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", self.bearer_token))?);
        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|error| Error::InvalidInput(format!("header name '{name}': {error}")))?;
            headers.insert(name, header_value(value)?);
        }
        Ok(headers)
    }
}

/// Percent-encodes a single path segment such as a record id.
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn header_value(raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|error| Error::InvalidInput(format!("header value: {error}")))
}

fn parse_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|payload| message_text(payload.message))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

/// Non-string messages are shown as their JSON text.
fn message_text(message: Value) -> Option<String> {
    match message {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Null | Value::Bool(false) | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
