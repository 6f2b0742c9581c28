use serde_json::Value;

use crate::error::ClientError;
use crate::http::error::map_reqwest_error;

/// Reads a response body as JSON, turning non-2xx statuses into API errors.
pub async fn handle_json_response(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<Value>(&bytes)
            .ok()
            .and_then(|body| extract_error_detail(&body))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
            });
        return Err(ClientError::api(status.as_u16(), detail));
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::invalid_response(&format!("invalid JSON from Replicate: {}", e))
    })
}

pub fn extract_error_detail(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }
    match body.get("error") {
        Some(Value::Object(obj)) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Some(Value::String(message)) => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod response_tests {
    use serde_json::json;

    use super::extract_error_detail;

    #[test]
    fn prefers_detail_field() {
        let body = json!({"detail": "Not found.", "error": "ignored"});
        assert_eq!(extract_error_detail(&body).as_deref(), Some("Not found."));
    }

    #[test]
    fn falls_back_to_error_shapes() {
        assert_eq!(
            extract_error_detail(&json!({"error": {"message": "bad token"}})).as_deref(),
            Some("bad token")
        );
        assert_eq!(
            extract_error_detail(&json!({"error": "throttled"})).as_deref(),
            Some("throttled")
        );
        assert_eq!(extract_error_detail(&json!({"status": 500})), None);
    }
}
