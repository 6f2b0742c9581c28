use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use url::{Origin, Url};

use crate::constants::{CONTENT_TYPE_JSON, LOG_PREFIX_ERROR, LOG_PREFIX_SUCCESS, USER_AGENT_PREFIX};
use crate::error::ClientError;
use crate::http::error::map_reqwest_error;
use crate::http::response::handle_json_response;
use crate::logging::{log_request, log_response_io, log_timed};

/// Shared HTTP transport for every accessor.
///
/// Holds one pooled `reqwest::Client`; auth and default headers are attached
/// once at construction.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
    base_origin: Origin,
}

impl Transport {
    pub fn new(
        base_url: &str,
        api_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_origin = Url::parse(base_url)
            .map_err(|e| ClientError::transport(&format!("invalid base URL {}: {}", base_url, e)))?
            .origin();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));

        if let Some(token) = api_token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Token {}", token))
                .map_err(|_| ClientError::transport("API token contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("{}/{}", USER_AGENT_PREFIX, env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(map_reqwest_error)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            base_origin,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an API path against the base URL. Absolute URLs (pagination
    /// cursors) are accepted only on the base URL's origin, since the auth
    /// header goes out with every request.
    pub fn endpoint_url(&self, path: &str) -> Result<String, ClientError> {
        if !path.starts_with("http://") && !path.starts_with("https://") {
            return Ok(format!("{}{}", self.base_url, path));
        }

        let url = Url::parse(path)
            .map_err(|e| ClientError::invalid_response(&format!("invalid cursor URL: {}", e)))?;
        if url.origin() != self.base_origin {
            return Err(ClientError::invalid_response(&format!(
                "cursor URL '{}' is not on {}",
                path, self.base_url
            )));
        }
        Ok(url.into())
    }

    pub async fn request(&self, method: reqwest::Method, path: &str) -> Result<Value, ClientError> {
        let start_time = Instant::now();
        let url = self.endpoint_url(path)?;
        log_request(method.as_str(), path);

        let result = match self.client.request(method.clone(), url.as_str()).send().await {
            Ok(response) => handle_json_response(response).await,
            Err(err) => Err(map_reqwest_error(err)),
        };

        match &result {
            Ok(body) => {
                log_timed(
                    LOG_PREFIX_SUCCESS,
                    &format!("{} {}", method, path),
                    start_time,
                );
                log_response_io(path, body);
            }
            Err(e) => log_timed(
                LOG_PREFIX_ERROR,
                &format!("{} {}: {}", method, path, e),
                start_time,
            ),
        }

        result
    }

    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(reqwest::Method::GET, path).await
    }
}
