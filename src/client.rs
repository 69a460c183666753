//! Messages API client facade.
//!
//! [`ApiClient`] is the single collaborator the scenarios talk to. It is
//! constructed once by the entry point and injected into each scenario
//! through the [`MessagesApi`] trait, so credential handling happens in one
//! place and tests can substitute a mock.

use crate::config::ClientConfig;
use crate::error::{ApiErrorResponse, ClientError};
use crate::types::{CreateMessageRequest, MessageResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, RETRY_AFTER};
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// The one operation consumed from the Messages API: create a message.
///
/// Calls block (at the await point) until a response or failure is
/// returned; there are no retries, no backoff and no circuit breaking here.
#[async_trait]
pub trait MessagesApi: Send + Sync {
    /// Send a create-message request and return the complete response
    async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> Result<MessageResponse, ClientError>;
}

/// Reqwest-based implementation of [`MessagesApi`]
pub struct ApiClient {
    http: reqwest::Client,
    messages_url: Url,
    headers: HeaderMap,
}

impl ApiClient {
    /// Create a new client from configuration.
    ///
    /// The endpoint URL and the static header set are built here once, so
    /// header construction failures surface at startup rather than on the
    /// first request.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        let messages_url = Url::parse(&config.base_url)?.join("/v1/messages")?;

        let mut headers = HeaderMap::new();
        let mut api_key =
            HeaderValue::from_str(config.api_key.expose_secret()).map_err(|_| {
                ClientError::Configuration {
                    message: "API key contains characters not valid in a header".to_string(),
                }
            })?;
        api_key.set_sensitive(true);
        headers.insert("x-api-key", api_key);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&config.api_version).map_err(|_| {
                ClientError::Configuration {
                    message: format!("Invalid API version string: {}", config.api_version),
                }
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http,
            messages_url,
            headers,
        })
    }
}

#[async_trait]
impl MessagesApi for ApiClient {
    async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> Result<MessageResponse, ClientError> {
        validate_request(&request)?;

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            has_system = request.system.is_some(),
            "sending create_message request"
        );

        let response = self
            .http
            .post(self.messages_url.clone())
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let body = response.bytes().await?;

        if status.is_success() {
            let message: MessageResponse = serde_json::from_slice(&body)?;
            tracing::debug!(
                id = %message.id,
                input_tokens = message.usage.input_tokens,
                output_tokens = message.usage.output_tokens,
                "received response"
            );
            Ok(message)
        } else {
            let error = map_api_error(status.as_u16(), retry_after, &body);
            tracing::warn!(status = status.as_u16(), error = %error, "request failed");
            Err(error)
        }
    }
}

/// Reject requests the API is guaranteed to refuse before spending a call
fn validate_request(request: &CreateMessageRequest) -> Result<(), ClientError> {
    if request.model.is_empty() {
        return Err(ClientError::Configuration {
            message: "model must not be empty".to_string(),
        });
    }
    if request.max_tokens == 0 {
        return Err(ClientError::Configuration {
            message: "max_tokens must be greater than 0".to_string(),
        });
    }
    if request.messages.is_empty() {
        return Err(ClientError::Configuration {
            message: "messages must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Parse a Retry-After header given in seconds
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Map a non-2xx response to the error taxonomy.
///
/// 429 becomes a rate-limit error carrying the advised wait; everything
/// else becomes an API error with the envelope's type tag and message. An
/// unparseable body falls back to the raw text with an "unknown" tag.
fn map_api_error(status: u16, retry_after: Option<Duration>, body: &[u8]) -> ClientError {
    let (error_type, message) = match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(envelope) => (envelope.error.error_type, envelope.error.message),
        Err(_) => (
            "unknown".to_string(),
            String::from_utf8_lossy(body).to_string(),
        ),
    };

    if status == 429 {
        ClientError::RateLimit {
            message,
            retry_after,
        }
    } else {
        ClientError::Api {
            status,
            error_type,
            message,
        }
    }
}
