use keygate_core::{authentication::parse_authorization_value, common_types::ApiKey};

use crate::{
    commands::error::ExtractError,
    console::{print_error_message, print_success_message},
};

/// Runs the header extraction rules against a value given on the command line.
pub fn handle_extract(header_value: &str) -> Result<ApiKey, ExtractError> {
    match parse_authorization_value(header_value) {
        Ok(api_key) => {
            print_success_message(&format!("API key: {}", api_key));
            Ok(api_key)
        }
        Err(e) => {
            print_error_message(&format!("Rejected: {}", e));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keygate_core::authentication::AuthError;

    #[test]
    fn test_extract_valid_value() {
        assert_eq!(handle_extract("ApiKey valid-api-key-123").unwrap(), "valid-api-key-123");
    }

    #[test]
    fn test_extract_classifies_errors() {
        assert!(matches!(handle_extract(""), Err(ExtractError::Rejected(AuthError::NoAuthHeader))));
        assert!(matches!(
            handle_extract("Bearer invalid-api-key"),
            Err(ExtractError::Rejected(AuthError::Malformed))
        ));
        assert!(matches!(
            handle_extract("ApiKey"),
            Err(ExtractError::Rejected(AuthError::Malformed))
        ));
    }
}
