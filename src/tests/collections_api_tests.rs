//! Tests for listing and fetching collections against a mock Replicate API
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::client_for;

fn text_to_image_payload() -> Value {
    json!({
        "name": "Text to image",
        "slug": "text-to-image",
        "description": "Models that generate images from text prompts",
        "models": [{
            "name": "Text to image",
            "slug": "text-to-image",
            "description": "Models that generate images from text prompts",
            "models": [{
                "url": "https://replicate.com/afiaka87/laionide-v4",
                "owner": "afiaka87",
                "name": "laionide-v4",
                "description": "GLIDE-text2im w/ humans and experimental style prompts."
            }]
        }]
    })
}

#[tokio::test]
async fn lists_collections_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections"))
        .and(header("Authorization", "Token abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "name": "Image to text",
                    "slug": "image-to-text",
                    "description": "Models that generate text prompts and captions from images"
                },
                {
                    "name": "Text to image",
                    "slug": "text-to-image",
                    "description": "Models that generate images from text prompts"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let collections = client.models().collections().list().await.unwrap();

    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].name, "Image to text");
    assert_eq!(collections[0].id, "image-to-text");
    assert_eq!(collections[1].name, "Text to image");
    assert_eq!(collections[1].id, "text-to-image");
    assert!(collections.iter().all(|c| c.models.is_none()));
}

#[tokio::test]
async fn list_page_follows_cursor() {
    let server = MockServer::start().await;
    let next = format!("{}/v1/collections?cursor=cD0y", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/collections"))
        .and(query_param("cursor", "cD0y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "previous": format!("{}/v1/collections", server.uri()),
            "results": [{"name": "Upscalers", "slug": "super-resolution", "description": ""}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": next,
            "previous": null,
            "results": [{"name": "Image to text", "slug": "image-to-text", "description": ""}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.collections().list_page(None).await.unwrap();
    assert_eq!(first.results[0].id, "image-to-text");
    assert_eq!(first.next.as_deref(), Some(next.as_str()));

    let second = client
        .collections()
        .list_page(first.next.as_deref())
        .await
        .unwrap();
    assert_eq!(second.results[0].id, "super-resolution");
    assert!(!second.has_next());
    assert!(second.previous.is_some());
}

#[tokio::test]
async fn get_unwraps_double_nested_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/text-to-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_to_image_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let collection = client.models().collections().get("text-to-image").await.unwrap();

    assert_eq!(collection.id, "text-to-image");
    let embedded = collection.models.as_ref().expect("embedded models");
    assert_eq!(embedded.len(), 1);
    assert_eq!(embedded[0].id, "afiaka87/laionide-v4");
    assert!(embedded[0].verified);

    let models = collection.models(&client).list().await.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].id, "afiaka87/laionide-v4");
    assert_eq!(models[0].username, "afiaka87");
    assert_eq!(&models, embedded);
}

#[tokio::test]
async fn api_errors_surface_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.collections().get("nope").await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.status_code, Some(404));
    assert_eq!(err.message, "Not found.");
}

#[tokio::test]
async fn malformed_collection_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Broken"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.collections().get("broken").await.unwrap_err();
    assert!(err.is_missing_field());
}

#[tokio::test]
async fn create_is_unsupported() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .collections()
        .create(json!({"name": "Mine", "slug": "mine"}))
        .await
        .unwrap_err();
    assert!(err.is_unsupported_operation());
    assert!(err.message.contains("collections.create"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn list_page_refuses_cursor_on_another_host() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(0)
        .mount(&other)
        .await;

    let client = client_for(&server);
    let cursor = format!("{}/v1/collections?cursor=cD0y", other.uri());
    let err = client
        .collections()
        .list_page(Some(&cursor))
        .await
        .unwrap_err();

    assert!(err.is_invalid_response());
    assert!(other.received_requests().await.unwrap_or_default().is_empty());
}
