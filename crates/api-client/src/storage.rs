//! Image uploads to Supabase Storage
//!
//! Uploaded objects land at `<folder>/<millis>-<random>-<file name>` inside
//! the configured bucket and are never overwritten. The returned public URL
//! is what the book form stores as `cover`.

use crate::client::{fallback_message, read_error_message};
use crate::config::StorageConfig;
use crate::error::{ApiError, ApiResult};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// Folder for book covers
pub const COVER_FOLDER: &str = "covers";

/// Folder for employee photos
pub const EMPLOYEE_FOLDER: &str = "employee";

/// Header telling storage whether an existing object may be replaced
const X_UPSERT: &str = "x-upsert";

static UNSAFE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("valid file name pattern"));

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name
    pub name: String,
    /// MIME type sent with the upload
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap in-memory contents
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its content type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            content_type: content_type_for(&name).to_string(),
            name,
            bytes,
        })
    }
}

fn content_type_for(name: &str) -> &'static str {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Where an upload ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Publicly resolvable URL of the object
    pub public_url: String,
    /// Object path inside the bucket
    pub path: String,
}

/// Replace every character outside `[A-Za-z0-9._-]` with `-`
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_NAME_CHARS.replace_all(name, "-").into_owned()
}

/// Build `<folder>/<millis>-<random>-<sanitized name>`
pub fn object_path(folder: &str, file_name: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    format!("{folder}/{stamp}-{}-{}", &random[..6], sanitize_file_name(file_name))
}

/// Object storage upload client
#[derive(Clone)]
pub struct StorageClient {
    inner: Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Create an upload client on an existing connection pool
    pub fn new(inner: Client, config: StorageConfig) -> Self {
        Self { inner, config }
    }

    /// Create an upload client with its own connection pool
    pub fn from_config(config: StorageConfig) -> ApiResult<Self> {
        let inner = Client::builder().build()?;
        Ok(Self::new(inner, config))
    }

    /// Storage settings in use
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Upload a book cover
    pub async fn upload_cover_image(&self, file: &UploadFile) -> ApiResult<UploadResult> {
        self.upload_image(file, COVER_FOLDER).await
    }

    /// Upload an employee photo
    pub async fn upload_employee_image(&self, file: &UploadFile) -> ApiResult<UploadResult> {
        self.upload_image(file, EMPLOYEE_FOLDER).await
    }

    /// Upload `file` under `folder` and resolve its public URL
    ///
    /// Fails with [`ApiError::Config`] before any request when the storage
    /// settings are incomplete.
    pub async fn upload_image(&self, file: &UploadFile, folder: &str) -> ApiResult<UploadResult> {
        self.config.ensure_complete()?;

        info!(
            name = %file.name,
            size = file.bytes.len(),
            content_type = %file.content_type,
            folder,
            "Uploading image"
        );

        let path = object_path(folder, &file.name);
        let url = self.object_url(&format!("object/{}/{path}", self.config.bucket))?;

        let response = self
            .inner
            .post(url)
            .bearer_auth(&self.config.anon_key)
            .header("apikey", &self.config.anon_key)
            .header(X_UPSERT, "false")
            .header(CONTENT_TYPE, &file.content_type)
            .body(file.bytes.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response)
                .await
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback_message(status));
            debug!(status = status.as_u16(), %message, "Storage rejected upload");
            return Err(ApiError::upload(message));
        }

        let public_url = self.public_url(&path)?;
        info!(%public_url, "Image uploaded");

        Ok(UploadResult { public_url, path })
    }

    /// Public URL of an object in the bucket
    pub fn public_url(&self, path: &str) -> ApiResult<String> {
        self.object_url(&format!("object/public/{}/{path}", self.config.bucket))
            .map(String::from)
            .map_err(|e| ApiError::upload(format!("could not resolve public URL: {e}")))
    }

    fn object_url(&self, route: &str) -> ApiResult<Url> {
        let base = format!("{}/storage/v1/", self.config.url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|base| base.join(route))
            .map_err(|e| ApiError::InvalidUrl(format!("{base}{route}: {e}")))
    }
}
