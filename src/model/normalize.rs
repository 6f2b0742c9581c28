//! Turns raw API payloads (or already-built entities) into normalized
//! entities with their derived fields recomputed.
//!
//! Derived fields (`id`, `username`) are never taken from upstream: every
//! pass overwrites them from the canonical fields, so normalizing twice
//! yields the same entity.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::constants::{
    FIELD_ID, FIELD_MODELS, FIELD_NAME, FIELD_OWNER, FIELD_SLUG, FIELD_USERNAME,
};
use crate::error::ClientError;
use crate::model::types::{Collection, Model};
use crate::model::utils::model_id;

/// What a normalizer accepts: a raw JSON object straight off the wire, or an
/// entity that has already been built.
#[derive(Debug, Clone)]
pub enum NormalizationInput<T> {
    Raw(Map<String, Value>),
    Constructed(T),
}

impl<T> NormalizationInput<T> {
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        match value {
            Value::Object(map) => Ok(Self::Raw(map)),
            other => Err(ClientError::invalid_response(&format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl<T> From<Map<String, Value>> for NormalizationInput<T> {
    fn from(map: Map<String, Value>) -> Self {
        Self::Raw(map)
    }
}

pub fn normalize_model(input: NormalizationInput<Model>) -> Result<Model, ClientError> {
    match input {
        NormalizationInput::Constructed(mut model) => {
            model.username = model.owner.clone();
            model.id = model_id(&model.username, &model.name);
            Ok(model)
        }
        NormalizationInput::Raw(mut attrs) => {
            let owner = require_str(&attrs, FIELD_OWNER)?;
            let name = require_str(&attrs, FIELD_NAME)?;
            let id = model_id(&owner, &name);
            attrs.insert(FIELD_USERNAME.to_string(), Value::String(owner));
            attrs.insert(FIELD_ID.to_string(), Value::String(id));
            build_entity(attrs, "model")
        }
    }
}

pub fn normalize_collection(
    input: NormalizationInput<Collection>,
) -> Result<Collection, ClientError> {
    match input {
        NormalizationInput::Constructed(mut collection) => {
            collection.id = collection.slug.clone();
            if let Some(models) = collection.models.take() {
                collection.models = Some(
                    models
                        .into_iter()
                        .map(|model| normalize_model(NormalizationInput::Constructed(model)))
                        .collect::<Result<_, _>>()?,
                );
            }
            Ok(collection)
        }
        NormalizationInput::Raw(mut attrs) => {
            let slug = require_str(&attrs, FIELD_SLUG)?;
            require_str(&attrs, FIELD_NAME)?;
            attrs.insert(FIELD_ID.to_string(), Value::String(slug));

            // Pulled out before typed construction so nothing downstream sees
            // the raw nesting.
            let models = match attrs.remove(FIELD_MODELS) {
                Some(raw) => unwrap_embedded_models(raw)?
                    .map(|items| {
                        items
                            .into_iter()
                            .map(|item| normalize_model(NormalizationInput::from_value(item)?))
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()?,
                None => None,
            };

            let mut collection: Collection = build_entity(attrs, "collection")?;
            collection.models = models;
            Ok(collection)
        }
    }
}

/// Extracts the model list embedded in a collection payload.
///
/// The API has been seen returning `models` double-nested: a one-element list
/// whose only element carries the real list under its own `models` key. That
/// wrapper is unwrapped here and only here; the flat documented shape passes
/// through. `null` means the payload carried no model list.
pub fn unwrap_embedded_models(raw: Value) -> Result<Option<Vec<Value>>, ClientError> {
    let mut items = match raw {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        other => {
            return Err(ClientError::invalid_response(&format!(
                "collection 'models' must be a list, got {}",
                json_type_name(&other)
            )));
        }
    };

    if let [Value::Object(wrapper)] = items.as_mut_slice()
        && is_collection_wrapper(wrapper)
    {
        return match wrapper.remove(FIELD_MODELS) {
            Some(Value::Array(inner)) => {
                let count = inner.len();
                log::debug!("unwrapping double-nested collection models ({} entries)", count);
                Ok(Some(inner))
            }
            None | Some(Value::Null) => {
                log::debug!("double-nested collection wrapper carries no model list");
                Ok(None)
            }
            Some(other) => Err(ClientError::invalid_response(&format!(
                "nested collection 'models' must be a list, got {}",
                json_type_name(&other)
            ))),
        };
    }

    Ok(Some(items))
}

/// A lone element is the wrapper when it carries its own `models` key, or
/// looks like a collection (`slug`) rather than a model (`owner`).
fn is_collection_wrapper(element: &Map<String, Value>) -> bool {
    element.contains_key(FIELD_MODELS)
        || (element.contains_key(FIELD_SLUG) && !element.contains_key(FIELD_OWNER))
}

fn require_str(attrs: &Map<String, Value>, field: &str) -> Result<String, ClientError> {
    match attrs.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        None | Some(Value::Null) => Err(ClientError::missing_field(field)),
        Some(other) => Err(ClientError::invalid_response(&format!(
            "field '{}' must be a string, got {}",
            field,
            json_type_name(other)
        ))),
    }
}

fn build_entity<T: DeserializeOwned>(
    attrs: Map<String, Value>,
    entity: &str,
) -> Result<T, ClientError> {
    serde_json::from_value(Value::Object(attrs))
        .map_err(|e| ClientError::invalid_response(&format!("malformed {}: {}", entity, e)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
