use crate::error::ClientError;

/// Canonical model id, `owner/name`.
pub fn model_id(owner: &str, name: &str) -> String {
    format!("{}/{}", owner, name)
}

/// Splits an `owner/name` identifier. Anything other than exactly two
/// non-empty parts is rejected.
pub fn parse_model_identifier(identifier: &str) -> Result<(&str, &str), ClientError> {
    match identifier.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(ClientError::invalid_identifier(identifier)),
    }
}
