//! The typed fetch wrapper.
//!
//! [`ApiClient::fetch`] is the single path every backend call takes:
//! send, classify status, parse JSON, validate against the response
//! type's schema. It does not cache, retry, or keep per-call state.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use taskify_core::error::ValidationError;
use taskify_core::schema::{self, NoContent, Validated};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client bound to one configured backend.
///
/// Cheap to clone; clones share the connection pool, cookie store and
/// configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Create a client with its own connection pool and cookie store.
    ///
    /// The cookie store lets a session cookie set by the backend ride along
    /// on every later request.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .cookie_store(true)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join a resource path onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request against `path`, with credentials attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.config.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a prepared request and validate the response as `T`.
    pub async fn fetch<T: Validated>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();
        tracing::debug!(%method, %url, "Sending API request");

        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            // A body that cannot be read still leaves the status to report.
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_status(status.as_u16(), &body);
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                message = %err.message(),
                "API request failed"
            );
            return Err(err);
        }

        let body = response.bytes().await?;
        let validated = decode_body::<T>(&body).and_then(schema::validate::<T>);
        validated.map_err(|err| {
            tracing::error!(
                %method,
                %url,
                violations = err.violations.len(),
                error = %err,
                "API response failed validation"
            );
            ApiError::Validation(err)
        })
    }

    // ---- verb helpers ----

    /// Sends a GET to `path` and validates the response as `T`.
    pub async fn get<T: Validated>(&self, path: &str) -> ApiResult<T> {
        self.fetch(self.request(Method::GET, path)).await
    }

    /// Sends a GET to `path` with `query` encoded as URL parameters.
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: Validated,
        Q: Serialize + ?Sized,
    {
        self.fetch(self.request(Method::GET, path).query(query)).await
    }

    /// Sends a POST to `path` with `body` as JSON.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: Validated,
        B: Serialize + ?Sized,
    {
        self.fetch(self.request(Method::POST, path).json(body)).await
    }

    /// Sends a PATCH to `path` with `body` as JSON.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: Validated,
        B: Serialize + ?Sized,
    {
        self.fetch(self.request(Method::PATCH, path).json(body)).await
    }

    /// Sends a PUT to `path` with `body` as JSON.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: Validated,
        B: Serialize + ?Sized,
    {
        self.fetch(self.request(Method::PUT, path).json(body)).await
    }

    /// `DELETE` ignoring whatever body comes back on success.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.fetch::<NoContent>(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }

    /// `POST` a multipart form (file uploads).
    pub async fn post_multipart<T: Validated>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        self.fetch(self.request(Method::POST, path).multipart(form))
            .await
    }
}

/// Parse a 2xx body into JSON.
///
/// An empty body reads as `null`. A body that is not JSON is tolerated only
/// when `T` is a pass-through; otherwise it is a validation failure.
fn decode_body<T: Validated>(body: &[u8]) -> Result<Value, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    match serde_json::from_slice(body) {
        Ok(value) => Ok(value),
        Err(_) if T::schema().is_pass_through() => Ok(Value::Null),
        Err(e) => Err(ValidationError::at_root(
            "JSON body",
            format!("unparsable body ({e})"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskify_core::models::Column;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::with_client(reqwest::Client::new(), ClientConfig::new(base_url))
    }

    #[test]
    fn url_joins_without_doubling_slashes() {
        let api = client("http://localhost:8080/4-1/");
        assert_eq!(api.url("/cards/7"), "http://localhost:8080/4-1/cards/7");
        assert_eq!(api.url("members"), "http://localhost:8080/4-1/members");
    }

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body::<NoContent>(b"").unwrap(), Value::Null);
        assert_eq!(decode_body::<Column>(b"  \n").unwrap(), Value::Null);
    }

    #[test]
    fn garbage_body_is_tolerated_only_for_pass_through() {
        assert_eq!(decode_body::<NoContent>(b"OK").unwrap(), Value::Null);

        let err = decode_body::<Column>(b"OK").unwrap_err();
        assert_eq!(err.violations[0].expected, "JSON body");
    }

    #[test]
    fn bearer_token_is_attached_when_configured() {
        let api = ApiClient::with_client(
            reqwest::Client::new(),
            ClientConfig::new("http://localhost:8080").with_access_token("tok"),
        );
        let request = api.request(Method::GET, "users/me").build().unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );
    }
}
