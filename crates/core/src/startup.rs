use std::{net::SocketAddr, path::Path, sync::Arc, time::Instant};

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware,
    middleware::Next,
    response::Response,
    routing::get,
    Json, Router,
};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    authentication::{create_authentication_routes, StaticApiKeyStore},
    yaml::{read, ApiConfig, ReadYamlError, CONFIG_FILE_NAME},
};

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum StartError {
    #[error("Failed to read the setup config: {0}")]
    ConfigError(#[from] ReadYamlError),

    #[error("Failed to start the API: {0}")]
    ApiStartupError(#[from] std::io::Error),
}

async fn health_check() -> Json<String> {
    Json("healthy".to_string())
}

/// Logs every request with its status and how long it took.
async fn activity_logger(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        error!("{} {} responded with {} after {:?}", method, uri, status, duration);
    } else if status.is_client_error() {
        warn!("{} {} responded with {} after {:?}", method, uri, status, duration);
    } else {
        info!("{} {} responded with {} after {:?}", method, uri, status, duration);
    }

    response
}

fn cors_layer(api_config: &ApiConfig) -> CorsLayer {
    // an empty list means the same as no list
    let allow_origin = match &api_config.allowed_origins {
        Some(origins) if !origins.is_empty() => AllowOrigin::list(
            origins.iter().filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
        _ => AllowOrigin::any(),
    };

    CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any)
}

/// Builds the service router.
///
/// `/health` is public; everything under `/authentication` needs a key the
/// state's key store accepts.
pub fn create_router(state: Arc<AppState>, api_config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/authentication", create_authentication_routes())
        .layer(middleware::from_fn(activity_logger))
        .layer(cors_layer(api_config))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    info!("Shutdown signal received, stopping keygate");
}

/// Starts the keygate service for the project at `project_path`.
///
/// Reads `keygate.yaml` and serves until ctrl-c. The caller is expected to
/// have loaded the project's `.env` (`${VAR}` references in the yaml resolve
/// against it) and installed a logger.
pub async fn start(project_path: &Path) -> Result<(), StartError> {
    let config = read(&project_path.join(CONFIG_FILE_NAME), false)?;
    let key_store = StaticApiKeyStore::new(config.api_keys.clone());
    info!("Loaded {} api key(s) for {}", key_store.len(), config.name);

    let state = Arc::new(AppState::new(config.name.clone(), Arc::new(key_store)));
    let app = create_router(state, &config.api_config);

    let address = SocketAddr::from(([0, 0, 0, 0], config.api_config.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("keygate listening on http://{}", address);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authentication::StatusResponse;
    use axum::{body::to_bytes, http::StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let state =
            Arc::new(AppState::new("billing", Arc::new(StaticApiKeyStore::new(["test-key"]))));
        create_router(state, &ApiConfig::default())
    }

    fn request(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_needs_no_key() {
        let response = app().oneshot(request("/health", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_status_with_valid_key() {
        let response =
            app().oneshot(request("/authentication/status", Some("ApiKey test-key"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: StatusResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(status.authenticated);
        assert_eq!(status.message, "API key accepted by billing");
    }

    #[tokio::test]
    async fn test_status_rejections() {
        for authorization in
            [None, Some(""), Some("ApiKey"), Some("Bearer test-key"), Some("ApiKey other-key")]
        {
            let response =
                app().oneshot(request("/authentication/status", authorization)).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", authorization);
        }
    }

    async fn allowed_origin(api_config: &ApiConfig) -> Option<HeaderValue> {
        let state =
            Arc::new(AppState::new("billing", Arc::new(StaticApiKeyStore::new(["test-key"]))));
        let request = Request::builder()
            .uri("/health")
            .header("origin", "https://example.com")
            .body(Body::empty())
            .unwrap();

        let response = create_router(state, api_config).oneshot(request).await.unwrap();
        response.headers().get("access-control-allow-origin").cloned()
    }

    #[tokio::test]
    async fn test_cors_without_origins_allows_any() {
        assert_eq!(
            allowed_origin(&ApiConfig::default()).await,
            Some(HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_cors_with_empty_origins_allows_any() {
        let config = crate::yaml::parse(
            "name: billing\napi_config:\n  allowed_origins: []\napi_keys: [test-key]\n",
            true,
        )
        .unwrap();

        assert_eq!(config.api_config.allowed_origins, Some(vec![]));
        assert_eq!(allowed_origin(&config.api_config).await, Some(HeaderValue::from_static("*")));
    }

    #[tokio::test]
    async fn test_cors_with_origins_only_allows_listed() {
        let listed = ApiConfig {
            allowed_origins: Some(vec!["https://example.com".to_string()]),
            ..ApiConfig::default()
        };
        assert_eq!(
            allowed_origin(&listed).await,
            Some(HeaderValue::from_static("https://example.com"))
        );

        let other = ApiConfig {
            allowed_origins: Some(vec!["https://other.example".to_string()]),
            ..ApiConfig::default()
        };
        assert_eq!(allowed_origin(&other).await, None);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = app().oneshot(request("/nope", Some("ApiKey test-key"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
