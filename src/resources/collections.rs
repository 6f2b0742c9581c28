use serde_json::Value;

use crate::constants::COLLECTIONS_ENDPOINT;
use crate::error::ClientError;
use crate::http::Transport;
use crate::model::{Collection, NormalizationInput, Page, normalize_collection};
use crate::resources::take_page;

/// Accessor for `/v1/collections`.
#[derive(Debug, Clone, Copy)]
pub struct CollectionAccessor<'a> {
    transport: &'a Transport,
}

impl<'a> CollectionAccessor<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// First page of collections. Further pages are only reachable through
    /// [`CollectionAccessor::list_page`].
    pub async fn list(&self) -> Result<Vec<Collection>, ClientError> {
        let page = self.list_page(None).await?;
        if page.has_next() {
            log::debug!("collections.list returned the first page only; more are available");
        }
        Ok(page.results)
    }

    /// One page of collections. `cursor` is the `next`/`previous` URL of an
    /// earlier page; `None` starts from the beginning.
    pub async fn list_page(&self, cursor: Option<&str>) -> Result<Page<Collection>, ClientError> {
        let path = cursor.unwrap_or(COLLECTIONS_ENDPOINT);
        log::debug!("listing collections from {}", path);
        let body = self.transport.get(path).await?;
        let page = take_page(body)?;

        let results = page
            .results
            .into_iter()
            .map(|item| self.prepare(item))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("normalized {} collections", results.len());

        Ok(Page {
            results,
            next: page.next,
            previous: page.previous,
        })
    }

    /// `slug` is interpolated into the path as given.
    pub async fn get(&self, slug: &str) -> Result<Collection, ClientError> {
        let path = format!("{}/{}", COLLECTIONS_ENDPOINT, slug);
        log::debug!("fetching collection from {}", path);
        let collection = self.prepare(self.transport.get(&path).await?)?;
        log::debug!(
            "collection '{}' embeds {} models",
            collection.slug,
            collection.models.as_ref().map_or(0, Vec::len)
        );
        Ok(collection)
    }

    pub async fn create(&self, _attrs: Value) -> Result<Collection, ClientError> {
        Err(ClientError::unsupported_operation("collections.create"))
    }

    fn prepare(&self, raw: Value) -> Result<Collection, ClientError> {
        let mut collection = normalize_collection(NormalizationInput::from_value(raw)?)?;
        if let Some(models) = collection.models.as_mut() {
            models.iter_mut().for_each(|model| model.verified = true);
        }
        Ok(collection)
    }
}
