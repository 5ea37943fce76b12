mod api_key;
pub use api_key::{extract_api_key, parse_authorization_value, AuthError, API_KEY_SCHEME};

mod api;
pub use api::{create_authentication_routes, StatusResponse};

mod guards;
pub use guards::{api_key_guard, ApiKeyGuard, AuthenticatedApiKey};

mod key_store;
pub use key_store::{ApiKeyStore, StaticApiKeyStore};
