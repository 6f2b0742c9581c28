pub mod collections;
pub mod models;
pub mod versions;

pub use collections::CollectionAccessor;
pub use models::ModelAccessor;
pub use versions::VersionAccessor;

use serde_json::Value;

use crate::constants::FIELD_RESULTS;
use crate::error::ClientError;
use crate::model::Page;

/// Splits a paginated listing body into its raw results and cursors.
pub(crate) fn take_page(mut body: Value) -> Result<Page<Value>, ClientError> {
    let results = match body.get_mut(FIELD_RESULTS).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ClientError::invalid_response(
                "'results' in listing response must be a list",
            ));
        }
        None => return Err(ClientError::missing_field(FIELD_RESULTS)),
    };

    let cursor = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);

    Ok(Page {
        results,
        next: cursor("next"),
        previous: cursor("previous"),
    })
}

#[cfg(test)]
mod page_tests {
    use serde_json::json;

    use super::take_page;

    #[test]
    fn reads_results_and_cursors() {
        let page = take_page(json!({
            "results": [{"slug": "a"}, {"slug": "b"}],
            "next": "https://api.replicate.com/v1/collections?cursor=cD0y",
            "previous": null
        }))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert!(page.has_next());
        assert!(page.previous.is_none());
    }

    #[test]
    fn missing_results_is_an_error() {
        let err = take_page(json!({"detail": "nope"})).unwrap_err();
        assert!(err.is_missing_field());
        assert!(take_page(json!({"results": {}})).unwrap_err().is_invalid_response());
    }
}
