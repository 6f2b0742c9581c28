use serde_json::Value;

use crate::constants::MODELS_ENDPOINT;
use crate::error::ClientError;
use crate::http::Transport;
use crate::model::{Model, Version};
use crate::resources::take_page;

/// Accessor for the versions of one model.
#[derive(Debug, Clone, Copy)]
pub struct VersionAccessor<'a> {
    transport: &'a Transport,
    model: &'a Model,
}

impl<'a> VersionAccessor<'a> {
    pub fn new(transport: &'a Transport, model: &'a Model) -> Self {
        Self { transport, model }
    }

    fn versions_path(&self) -> String {
        format!(
            "{}/{}/{}/versions",
            MODELS_ENDPOINT, self.model.username, self.model.name
        )
    }

    pub async fn list(&self) -> Result<Vec<Version>, ClientError> {
        let path = self.versions_path();
        log::debug!("listing versions from {}", path);
        let versions = take_page(self.transport.get(&path).await?)?
            .results
            .into_iter()
            .map(parse_version)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("model '{}' has {} versions", self.model.id, versions.len());
        Ok(versions)
    }

    pub async fn get(&self, id: &str) -> Result<Version, ClientError> {
        let path = format!("{}/{}", self.versions_path(), id);
        log::debug!("fetching version from {}", path);
        parse_version(self.transport.get(&path).await?)
    }
}

fn parse_version(raw: Value) -> Result<Version, ClientError> {
    serde_json::from_value(raw)
        .map_err(|e| ClientError::invalid_response(&format!("malformed version: {}", e)))
}
