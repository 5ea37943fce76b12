pub mod common_types;

mod http_errors;
pub use http_errors::{internal_server_error, unauthorized, HttpError};
