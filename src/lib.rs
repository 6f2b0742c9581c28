//! Typed client for the Replicate models and collections API.
//!
//! ```no_run
//! # async fn run() -> Result<(), replicate_models::ClientError> {
//! let client = replicate_models::Client::from_env()?;
//! let collection = client.models().collections().get("text-to-image").await?;
//! for model in collection.models(&client).list().await? {
//!     println!("{}", model.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod constants;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod resources;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientConfig};
pub use error::ClientError;
pub use model::{Collection, Model, NormalizationInput, Page, Version};
pub use resources::{CollectionAccessor, ModelAccessor, VersionAccessor};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
