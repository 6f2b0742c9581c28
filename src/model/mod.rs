pub mod normalize;
pub mod types;
pub mod utils;

pub use normalize::{
    NormalizationInput, normalize_collection, normalize_model, unwrap_embedded_models,
};
pub use types::{Collection, Model, Page, Version};
pub use utils::{model_id, parse_model_identifier};
