/// Replicate API endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.replicate.com";
pub const COLLECTIONS_ENDPOINT: &str = "/v1/collections";
pub const MODELS_ENDPOINT: &str = "/v1/models";

/// Environment variable holding the API token
pub const API_TOKEN_ENV: &str = "REPLICATE_API_TOKEN";

/// Request defaults
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const USER_AGENT_PREFIX: &str = "replicate-rs";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Payload field names
pub const FIELD_ID: &str = "id";
pub const FIELD_OWNER: &str = "owner";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_NAME: &str = "name";
pub const FIELD_SLUG: &str = "slug";
pub const FIELD_MODELS: &str = "models";
pub const FIELD_RESULTS: &str = "results";

/// Error messages
pub const ERROR_PREDICT_REMOVED: &str = "The `model.predict()` method has been removed, because it's unstable: if a new version of the model you're using is pushed and its API has changed, your code may break. Use `version.predict()` instead.";
pub const ERROR_CONNECT: &str = "Replicate API not reachable";
pub const ERROR_TIMEOUT: &str = "Request timed out";

/// Logging prefixes
pub const LOG_PREFIX_SUCCESS: &str = "✅";
pub const LOG_PREFIX_ERROR: &str = "❌";
pub const LOG_PREFIX_WARNING: &str = "⚠️";
