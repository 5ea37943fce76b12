use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{
    app_state::AppState,
    authentication::api_key::{extract_api_key, AuthError},
    shared::{common_types::ApiKey, internal_server_error, unauthorized, HttpError},
};

impl From<AuthError> for HttpError {
    fn from(error: AuthError) -> HttpError {
        unauthorized(Some(error.to_string()))
    }
}

/// Extractor that only succeeds for requests carrying a known API key.
///
/// Runs the header extraction and then asks the configured key store
/// whether the key is accepted. Every rejection is a 401.
pub struct ApiKeyGuard(pub ApiKey);

impl FromRequestParts<Arc<AppState>> for ApiKeyGuard {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let api_key = extract_api_key(&parts.headers).map_err(|error| {
            warn!("{} {} rejected: {}", parts.method, parts.uri, error);
            HttpError::from(error)
        })?;

        if !state.key_store.is_valid(&api_key) {
            warn!("{} {} rejected: unknown api key", parts.method, parts.uri);
            return Err(unauthorized(Some("invalid api key".to_string())));
        }

        Ok(ApiKeyGuard(api_key))
    }
}

/// Middleware guard that requires a known API key.
///
/// On success the key is stored in the request extensions as an
/// [`AuthenticatedApiKey`] so downstream handlers can read it without
/// repeating the check.
///
/// # Returns
/// * `Ok(Response)` - The response of the next handler
/// * `Err(HttpError)` - UNAUTHORIZED if the key is missing, malformed or unknown
pub async fn api_key_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let (mut parts, body) = req.into_parts();
    let ApiKeyGuard(api_key) = ApiKeyGuard::from_request_parts(&mut parts, &state).await?;
    parts.extensions.insert(AuthenticatedApiKey(api_key));

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Marker inserted by [`api_key_guard`] carrying the accepted key.
///
/// Extracting it on a route mounted without the middleware is a wiring
/// mistake on the server, so that case is a 500 rather than a 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedApiKey(pub ApiKey);

impl<S> FromRequestParts<S> for AuthenticatedApiKey
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthenticatedApiKey>().cloned().ok_or_else(|| {
            tracing::error!("{} {} has no api key guard in front of it", parts.method, parts.uri);
            internal_server_error(None)
        })
    }
}
