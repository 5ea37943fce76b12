use axum::http::StatusCode;

pub type HttpError = (StatusCode, String);

pub fn internal_server_error(message: Option<String>) -> HttpError {
    (StatusCode::INTERNAL_SERVER_ERROR, message.unwrap_or("Internal server error".to_string()))
}

pub fn unauthorized(message: Option<String>) -> HttpError {
    (StatusCode::UNAUTHORIZED, message.unwrap_or("Unauthorized".to_string()))
}
