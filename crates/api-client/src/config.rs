//! Configuration for the library API client
//!
//! The REST base URL has a built-in default per environment. Object storage
//! settings are only needed for image uploads; CRUD calls work without them.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Production REST API
const DEFAULT_API_URL: &str = "https://backendlibrary-production-0510.up.railway.app";

/// Local backend
const DEVELOPMENT_API_URL: &str = "http://localhost:2112";

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local backend on port 2112
    Development,
    /// Hosted backend
    #[default]
    Production,
}

impl Environment {
    /// Parse from the `LIBRARY_ENV` environment variable
    pub fn from_env() -> Self {
        match env::var("LIBRARY_ENV")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" | "local" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Default REST base URL for this environment
    #[must_use]
    pub fn default_api_url(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT_API_URL,
            Self::Production => DEFAULT_API_URL,
        }
    }
}

/// Object storage settings for image uploads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage project URL, e.g. `https://<project>.supabase.co`
    pub url: String,
    /// Access key sent as bearer token and `apikey`
    pub anon_key: String,
    /// Bucket receiving the images
    pub bucket: String,
}

impl StorageConfig {
    /// Create storage settings
    pub fn new(
        url: impl Into<String>,
        anon_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            bucket: bucket.into(),
        }
    }

    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `SUPABASE_BUCKET`
    ///
    /// Unset variables leave the matching field empty.
    pub fn from_env() -> Self {
        Self {
            url: env::var("SUPABASE_URL").unwrap_or_default(),
            anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            bucket: env::var("SUPABASE_BUCKET").unwrap_or_default(),
        }
    }

    /// Whether every setting is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            ("SUPABASE_URL", &self.url),
            ("SUPABASE_ANON_KEY", &self.anon_key),
            ("SUPABASE_BUCKET", &self.bucket),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail with a configuration error naming the missing settings
    pub fn ensure_complete(&self) -> ApiResult<()> {
        let missing = self.missing();
        if missing.is_empty() {
            return Ok(());
        }
        Err(ApiError::config(format!(
            "storage configuration is incomplete, set {}",
            missing.join(", ")
        )))
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// Per-request timeout; requests wait indefinitely when unset
    #[serde(with = "optional_secs")]
    pub timeout: Option<Duration>,
    /// Current environment
    pub environment: Environment,
    /// Object storage for image uploads
    pub storage: StorageConfig,
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            environment: Environment::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `LIBRARY_ENV`: Environment (development/production)
    /// - `LIBRARY_API_URL`: REST base URL, overriding the environment default
    /// - `LIBRARY_TIMEOUT_SECS`: Request timeout in seconds
    /// - `SUPABASE_URL`, `SUPABASE_ANON_KEY`, `SUPABASE_BUCKET`: Upload storage
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();

        let base_url = env::var("LIBRARY_API_URL")
            .unwrap_or_else(|_| environment.default_api_url().to_string());

        let timeout = match env::var("LIBRARY_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                ApiError::config(format!("LIBRARY_TIMEOUT_SECS is not a number: {raw}"))
            })?)),
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            timeout,
            environment,
            storage: StorageConfig::from_env(),
        })
    }

    /// Load configuration from a TOML file
    ///
    /// Keys left out of the file keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&content).map_err(|e| {
            ApiError::config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Create development configuration (local backend)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: DEVELOPMENT_API_URL.to_string(),
            environment: Environment::Development,
            storage: StorageConfig::from_env(),
            ..Self::default()
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builder-style method to set upload storage
    #[must_use]
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Validate the configuration
    ///
    /// Storage settings are checked at upload time instead.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
