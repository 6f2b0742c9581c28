use serde_json::{Map, Value};

use crate::constants::{COLLECTIONS_ENDPOINT, FIELD_MODELS, FIELD_NAME, FIELD_OWNER};
use crate::error::ClientError;
use crate::http::Transport;
use crate::model::{
    Collection, Model, NormalizationInput, normalize_collection, normalize_model,
    parse_model_identifier,
};
use crate::resources::CollectionAccessor;

/// Accessor for models, optionally scoped to one collection.
#[derive(Debug, Clone, Copy)]
pub struct ModelAccessor<'a> {
    transport: &'a Transport,
    collection: Option<&'a Collection>,
}

impl<'a> ModelAccessor<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self {
            transport,
            collection: None,
        }
    }

    pub fn bound(transport: &'a Transport, collection: &'a Collection) -> Self {
        Self {
            transport,
            collection: Some(collection),
        }
    }

    pub fn collection(&self) -> Option<&'a Collection> {
        self.collection
    }

    pub fn collections(&self) -> CollectionAccessor<'a> {
        CollectionAccessor::new(self.transport)
    }

    /// Models of the bound collection, fetched fresh from the server.
    /// There is no endpoint listing every model, so an unbound accessor fails.
    pub async fn list(&self) -> Result<Vec<Model>, ClientError> {
        let Some(collection) = self.collection else {
            return Err(ClientError::unsupported_operation(
                "models.list without a collection",
            ));
        };

        let path = format!("{}/{}", COLLECTIONS_ENDPOINT, collection.slug);
        log::debug!("listing models of collection from {}", path);
        let body = self.transport.get(&path).await?;
        let refreshed = normalize_collection(NormalizationInput::from_value(body)?)?;

        let mut models = refreshed
            .models
            .ok_or_else(|| ClientError::missing_field(FIELD_MODELS))?;
        models.iter_mut().for_each(|model| model.verified = true);
        log::debug!(
            "collection '{}' lists {} models",
            collection.slug,
            models.len()
        );
        Ok(models)
    }

    /// Builds a model from `owner/name` without touching the network. The
    /// result is unverified: a bad pair only surfaces once the model is used.
    pub async fn get(&self, identifier: &str) -> Result<Model, ClientError> {
        let (owner, name) = parse_model_identifier(identifier)?;

        let mut attrs = Map::new();
        attrs.insert(FIELD_OWNER.to_string(), Value::String(owner.to_string()));
        attrs.insert(FIELD_NAME.to_string(), Value::String(name.to_string()));
        normalize_model(NormalizationInput::Raw(attrs))
    }

    pub async fn create(&self, _attrs: Value) -> Result<Model, ClientError> {
        Err(ClientError::unsupported_operation("models.create"))
    }
}
