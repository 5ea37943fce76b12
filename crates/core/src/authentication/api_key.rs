use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

use crate::shared::common_types::ApiKey;

/// The only scheme accepted in the `Authorization` header.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    Malformed,
}

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// The header name lookup is case-insensitive. A missing header and an empty
/// header are both reported as [`AuthError::NoAuthHeader`]; anything else that
/// does not follow the `ApiKey <token>` scheme is [`AuthError::Malformed`].
///
/// # Arguments
/// * `headers` - The HTTP header map to search
///
/// # Returns
/// * `Ok(ApiKey)` - The credential token, exactly as it appeared in the header
/// * `Err(AuthError)` - The classified reason no key could be extracted
pub fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::NoAuthHeader)?;

    if header.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let value = header.to_str().map_err(|_| AuthError::Malformed)?;

    parse_authorization_value(value)
}

/// Applies the `ApiKey <token>` rules to a raw header value.
///
/// Splits on whitespace and requires at least two fields, the first being
/// exactly `ApiKey`. The second field is returned verbatim.
pub fn parse_authorization_value(value: &str) -> Result<ApiKey, AuthError> {
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(token)) => Ok(token.to_string()),
        _ => Err(AuthError::Malformed),
    }
}
