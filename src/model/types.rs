use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Client;
use crate::constants::ERROR_PREDICT_REMOVED;
use crate::error::ClientError;
use crate::resources::{ModelAccessor, VersionAccessor};

/// A model hosted on Replicate, addressed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Model {
    #[serde(default)]
    pub url: Option<String>,
    pub owner: String,
    /// Always equal to `owner` once normalized.
    pub username: String,
    pub name: String,
    /// Derived as `username/name`; upstream values are overwritten.
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub paper_url: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub run_count: Option<u64>,
    #[serde(default)]
    pub latest_version: Option<Version>,
    /// Set only when the model came out of a server payload. Models built by
    /// `ModelAccessor::get` are unverified until something fetches them.
    #[serde(skip)]
    pub verified: bool,
}

impl Model {
    pub fn versions<'a>(&'a self, client: &'a Client) -> VersionAccessor<'a> {
        VersionAccessor::new(client.transport(), self)
    }

    pub fn predict(&self) -> Result<Value, ClientError> {
        Err(ClientError::removed_feature(ERROR_PREDICT_REMOVED))
    }
}

/// A curated group of models.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Collection {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Always equal to `slug` once normalized.
    pub id: String,
    /// Present only when the payload embedded the collection's models.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<Model>>,
}

impl Collection {
    /// Accessor scoped to this collection; `list()` refetches it from the server.
    pub fn models<'a>(&'a self, client: &'a Client) -> ModelAccessor<'a> {
        ModelAccessor::bound(client.transport(), self)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Version {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cog_version: Option<String>,
    #[serde(default)]
    pub openapi_schema: Option<Value>,
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
