use std::error::Error;
use std::fmt;

/// Error type for the Replicate client
#[derive(Debug, Clone)]
pub struct ClientError {
    pub message: String,
    pub status_code: Option<u16>,
    kind: ClientErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientErrorKind {
    MissingField,
    InvalidIdentifier,
    UnsupportedOperation,
    RemovedFeature,
    Transport,
    Api,
    InvalidResponse,
}

impl ClientErrorKind {
    fn label(self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::InvalidIdentifier => "invalid identifier",
            Self::UnsupportedOperation => "unsupported operation",
            Self::RemovedFeature => "removed feature",
            Self::Transport => "transport error",
            Self::Api => "API error",
            Self::InvalidResponse => "invalid response",
        }
    }
}

impl ClientError {
    fn with_kind(kind: ClientErrorKind, message: String) -> Self {
        Self {
            message,
            status_code: None,
            kind,
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::with_kind(
            ClientErrorKind::MissingField,
            format!("required field '{}' is absent", field),
        )
    }

    pub fn invalid_identifier(identifier: &str) -> Self {
        Self::with_kind(
            ClientErrorKind::InvalidIdentifier,
            format!("'{}' is not of the form 'owner/name'", identifier),
        )
    }

    pub fn unsupported_operation(operation: &str) -> Self {
        Self::with_kind(
            ClientErrorKind::UnsupportedOperation,
            format!("{} is not supported", operation),
        )
    }

    pub fn removed_feature(message: &str) -> Self {
        Self::with_kind(ClientErrorKind::RemovedFeature, message.to_string())
    }

    pub fn transport(message: &str) -> Self {
        Self::with_kind(ClientErrorKind::Transport, message.to_string())
    }

    pub fn api(status_code: u16, detail: String) -> Self {
        Self {
            message: detail,
            status_code: Some(status_code),
            kind: ClientErrorKind::Api,
        }
    }

    pub fn invalid_response(message: &str) -> Self {
        Self::with_kind(ClientErrorKind::InvalidResponse, message.to_string())
    }

    pub fn is_missing_field(&self) -> bool {
        self.kind == ClientErrorKind::MissingField
    }

    pub fn is_invalid_identifier(&self) -> bool {
        self.kind == ClientErrorKind::InvalidIdentifier
    }

    pub fn is_unsupported_operation(&self) -> bool {
        self.kind == ClientErrorKind::UnsupportedOperation
    }

    pub fn is_removed_feature(&self) -> bool {
        self.kind == ClientErrorKind::RemovedFeature
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ClientErrorKind::Transport
    }

    pub fn is_api(&self) -> bool {
        self.kind == ClientErrorKind::Api
    }

    pub fn is_invalid_response(&self) -> bool {
        self.kind == ClientErrorKind::InvalidResponse
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} {}: {}", self.kind.label(), code, self.message),
            None => write!(f, "{}: {}", self.kind.label(), self.message),
        }
    }
}

impl Error for ClientError {}

#[cfg(test)]
mod error_tests {
    use super::ClientError;

    #[test]
    fn messages_name_the_violated_precondition() {
        let err = ClientError::missing_field("slug");
        assert!(err.is_missing_field());
        assert!(err.to_string().contains("'slug'"));

        let err = ClientError::invalid_identifier("stability-ai");
        assert!(err.is_invalid_identifier());
        assert!(err.message.contains("stability-ai"));

        let err = ClientError::unsupported_operation("models.list");
        assert!(err.is_unsupported_operation());
        assert_eq!(err.to_string(), "unsupported operation: models.list is not supported");
    }

    #[test]
    fn api_errors_carry_status_code() {
        let err = ClientError::api(404, "Not found.".to_string());
        assert!(err.is_api());
        assert_eq!(err.status_code, Some(404));
        assert_eq!(err.to_string(), "API error 404: Not found.");
    }
}
