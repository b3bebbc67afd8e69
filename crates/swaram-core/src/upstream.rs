use http::{HeaderValue, StatusCode};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use swaram_config::UpstreamConfig;
use thiserror::Error;
use url::Url;

use crate::{error::HttpError, http_client};

/// Header carrying the subscription key on every upstream call
pub const API_KEY_HEADER: &str = "api-subscription-key";

pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Failures of a single upstream exchange
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No credential configured; raised before any network traffic
    #[error("Server misconfiguration: API Key missing")]
    MissingCredential,

    /// Upstream answered with a non-success status
    #[error("Sarvam API error: {body}")]
    Api { status: u16, body: String },

    /// Upstream did not answer within the configured timeout
    #[error("{0}")]
    Timeout(String),

    /// Connection, TLS or body transfer failure
    #[error("{0}")]
    Transport(String),

    /// Success status but the body does not have the expected shape
    #[error("Unexpected response from Sarvam API: {0}")]
    InvalidResponse(String),
}

impl HttpError for UpstreamError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Api { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Self::MissingCredential | Self::Timeout(_) | Self::Transport(_) | Self::InvalidResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingCredential => "configuration_error",
            Self::Api { .. } => "upstream_error",
            Self::Timeout(_) => "timeout_error",
            Self::Transport(_) => "transport_error",
            Self::InvalidResponse(_) => "upstream_shape_error",
        }
    }
}

/// Client for the Sarvam speech/language API
///
/// Built once at startup and cloned into each endpoint's state. Holds no
/// mutable data, so clones can be used from any number of tasks at once.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<HeaderValue>,
}

impl UpstreamClient {
    /// Create the client from configuration
    ///
    /// A missing credential is accepted; calls then fail with
    /// [`UpstreamError::MissingCredential`].
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is invalid, the key cannot be sent as
    /// a header value, or the HTTP client fails to build
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = http_client::build(config.timeout_duration()?)?;

        let api_key = config
            .credential()
            .map(|key| {
                let mut value = HeaderValue::from_str(key.expose_secret().trim())
                    .map_err(|_| anyhow::anyhow!("upstream API key contains characters not allowed in a header"))?;
                value.set_sensitive(true);
                Ok::<_, anyhow::Error>(value)
            })
            .transpose()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// Whether a credential is configured
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL for an upstream path such as `/text-to-speech`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Fail with [`UpstreamError::MissingCredential`] unless a key is configured
    ///
    /// Handlers call this before reading the request body so that a
    /// misconfigured gateway reports 500 regardless of the input.
    pub fn ensure_credential(&self, path: &str) -> Result<()> {
        self.credential(path).map(|_| ())
    }

    fn credential(&self, path: &str) -> Result<&HeaderValue> {
        self.api_key.as_ref().ok_or_else(|| {
            tracing::error!(endpoint = path, "upstream API key is not configured");
            UpstreamError::MissingCredential
        })
    }

    /// POST a JSON body and return the JSON response
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized + Sync,
    {
        let key = self.credential(path)?;

        let request = self
            .client
            .post(self.endpoint(path))
            .header(API_KEY_HEADER, key.clone())
            .json(body);

        self.execute(path, request).await
    }

    /// POST a multipart form and return the JSON response
    pub async fn post_multipart(&self, path: &str, form: reqwest::multipart::Form) -> Result<Value> {
        let key = self.credential(path)?;

        let request = self
            .client
            .post(self.endpoint(path))
            .header(API_KEY_HEADER, key.clone())
            .multipart(form);

        self.execute(path, request).await
    }

    async fn execute(&self, path: &str, request: reqwest::RequestBuilder) -> Result<Value> {
        tracing::debug!(endpoint = path, "sending upstream request");

        let response = request.send().await.map_err(|e| transport_error(path, &e))?;
        let status = response.status();

        tracing::debug!(endpoint = path, status = status.as_u16(), "upstream responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(endpoint = path, status = status.as_u16(), "Sarvam API error: {body}");

            return Err(UpstreamError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| transport_error(path, &e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(endpoint = path, error = %e, "upstream response is not valid JSON");
            UpstreamError::InvalidResponse(format!("body is not valid JSON: {e}"))
        })
    }
}

/// Read a typed view of an upstream JSON body
///
/// Fields the gateway depends on should be `Option` or defaulted in `T`, so
/// that this only fails on outright type mismatches.
pub fn decode<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| {
        tracing::error!(endpoint = path, error = %e, "upstream response has an unexpected shape");
        UpstreamError::InvalidResponse(e.to_string())
    })
}

fn transport_error(path: &str, error: &reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        tracing::error!(endpoint = path, timeout = true, "upstream request timed out: {error}");
        UpstreamError::Timeout(error.to_string())
    } else {
        tracing::error!(endpoint = path, timeout = false, "upstream request failed: {error}");
        UpstreamError::Transport(error.to_string())
    }
}
