mod app_state;
pub use app_state::AppState;
pub mod authentication;
mod logger;
pub use logger::{setup_info_logger, setup_logger};
mod shared;
pub use shared::{common_types, internal_server_error, unauthorized, HttpError};
mod startup;
pub use startup::{create_router, start, StartError};
mod environment;
pub use environment::load_env_from_project_path;
mod yaml;
pub use yaml::{parse, read, ApiConfig, ReadYamlError, SetupConfig, CONFIG_FILE_NAME};

pub use tracing::info as keygate_info;
