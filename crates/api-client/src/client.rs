//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{BooksApi, EmployeesApi, LoansApi, MembersApi};
use crate::error::{ApiError, ApiResult};
use crate::storage::StorageClient;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Library API client
///
/// A cheap, cloneable handle around one `reqwest` connection pool. Every
/// request goes through [`LibraryClient::request`]: non-2xx responses become
/// [`ApiError::ApiResponse`] and `204 No Content` becomes `None`.
///
/// No retries are attempted; every failure is returned to the caller.
#[derive(Clone)]
pub struct LibraryClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl LibraryClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("library-admin-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build().map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access book endpoints
    #[must_use]
    pub fn books(&self) -> BooksApi {
        BooksApi::new(self.clone())
    }

    /// Access member endpoints
    #[must_use]
    pub fn members(&self) -> MembersApi {
        MembersApi::new(self.clone())
    }

    /// Access employee endpoints
    #[must_use]
    pub fn employees(&self) -> EmployeesApi {
        EmployeesApi::new(self.clone())
    }

    /// Access loan endpoints
    #[must_use]
    pub fn loans(&self) -> LoansApi {
        LoansApi::new(self.clone())
    }

    /// Access the image upload client, sharing this client's connection pool
    #[must_use]
    pub fn storage(&self) -> StorageClient {
        StorageClient::new(self.inner.clone(), self.config.storage.clone())
    }

    // -------------------------------------------------------------------------
    // HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        self.request(Method::GET, path, Option::<&()>::None).await
    }

    /// Perform a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Option<T>> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Perform a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Option<T>> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Perform a PATCH request with a JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Option<T>> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Perform a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request::<IgnoredAny, ()>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }

    /// Execute a request against `base_url + path`
    ///
    /// Returns `Ok(None)` for `204 No Content` and the decoded JSON body for
    /// any other 2xx status. The response type is trusted, not checked
    /// beyond what deserialization requires.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Option<T>> {
        let url = self.url(path);
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        debug!(request_id = %request_id, method = %method, url = %url, "Sending request");

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, &request_id);

        if let Some(b) = body {
            request = request.json(b);
        }

        let start = Instant::now();
        let response = request.send().await?;

        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Received response"
        );

        handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Turn a response into a decoded body or an error
async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<Option<T>> {
    let status = response.status();

    if !status.is_success() {
        let message = read_error_message(response)
            .await
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback_message(status));
        return Err(ApiError::api_response(status.as_u16(), message));
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Best-effort message from an error response body
///
/// JSON bodies contribute their `message` field, or the whole document when
/// there is none. Other bodies contribute their text. `None` when the body
/// cannot be read.
pub(crate) async fn read_error_message(response: Response) -> Option<String> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    if is_json {
        let value: Value = response.json().await.ok()?;
        return Some(message_from_json(&value));
    }

    response.text().await.ok()
}

fn message_from_json(value: &Value) -> String {
    match value.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => value.to_string(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn fallback_message(status: StatusCode) -> String {
    format!(
        "request failed: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .trim_end()
    .to_string()
}
