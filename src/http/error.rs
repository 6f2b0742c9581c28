use crate::constants::{ERROR_CONNECT, ERROR_TIMEOUT};
use crate::error::ClientError;

pub fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_connect() {
        ClientError::transport(ERROR_CONNECT)
    } else if err.is_timeout() {
        ClientError::transport(ERROR_TIMEOUT)
    } else {
        log::error!("HTTP request failed: {}", err);
        ClientError::transport(&format!("Replicate request failed: {}", err))
    }
}
