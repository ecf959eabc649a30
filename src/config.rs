//! Command-line and environment configuration for the register server.

use crate::framework::mock::{MockError, MockRegistry, MockTable, NoMocks};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// API version used when neither a flag nor the OpenAPI document names one.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Server configuration. Every flag can also be set through its env var.
#[derive(Debug, Clone, Parser)]
#[command(name = "oss-register", version, about = "Public register of open-source repositories")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "OSS_REGISTER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on. 0 means OS-assigned.
    #[arg(long, env = "OSS_REGISTER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Value of the `API-Version` response header. Defaults to the OpenAPI
    /// document's `info.version`.
    #[arg(long, env = "OSS_REGISTER_API_VERSION")]
    pub api_version: Option<String>,

    /// OpenAPI document served at `/v1/openapi.json`.
    #[arg(long, env = "OSS_REGISTER_OPENAPI", default_value = "./api/openapi.json")]
    pub openapi: PathBuf,

    /// JSON mock table redirecting operations to canned outcomes.
    #[arg(long, env = "OSS_REGISTER_MOCKS")]
    pub mocks: Option<PathBuf>,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the mock registry: the configured table, or none at all.
    pub fn mock_registry(&self) -> Result<Arc<dyn MockRegistry>, MockError> {
        match &self.mocks {
            Some(path) => {
                let table = MockTable::from_file(path)?;
                info!(path = %path.display(), entries = table.len(), "Loaded mock table");
                Ok(Arc::new(table))
            }
            None => Ok(Arc::new(NoMocks)),
        }
    }

    /// The `API-Version` header value: the flag, else the OpenAPI document's
    /// version, else [`DEFAULT_API_VERSION`].
    pub fn resolve_api_version(&self) -> String {
        if let Some(version) = &self.api_version {
            return version.clone();
        }
        match load_openapi_version(&self.openapi) {
            Ok(version) => version,
            Err(e) => {
                warn!(error = %e, "Falling back to default API version");
                DEFAULT_API_VERSION.to_string()
            }
        }
    }
}

/// Errors raised while reading the version from an OpenAPI document.
#[derive(Debug, thiserror::Error)]
pub enum OpenApiError {
    #[error("could not open OpenAPI document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse OpenAPI document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("version missing from OpenAPI document")]
    MissingVersion,
}

#[derive(Deserialize)]
struct OpenApiHead {
    #[serde(default)]
    info: OpenApiInfo,
}

#[derive(Default, Deserialize)]
struct OpenApiInfo {
    #[serde(default)]
    version: String,
}

/// Reads `info.version` from an OpenAPI document.
pub fn load_openapi_version(path: &Path) -> Result<String, OpenApiError> {
    let json = std::fs::read_to_string(path).map_err(|source| OpenApiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let head: OpenApiHead = serde_json::from_str(&json)?;
    if head.info.version.is_empty() {
        return Err(OpenApiError::MissingVersion);
    }
    Ok(head.info.version)
}
