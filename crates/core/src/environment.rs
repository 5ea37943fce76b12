use std::path::Path;

use dotenvy::{dotenv, from_path};

/// Loads environment variables from a .env file in the project directory.
///
/// Falls back to the default `.env` lookup from the current working
/// directory when the project has none. Variables already set in the
/// process environment are never overridden.
///
/// # Arguments
/// * `project_path` - Path to the project directory to search for .env file
pub fn load_env_from_project_path(project_path: &Path) {
    if from_path(project_path.join(".env")).is_err() {
        dotenv().ok();
    }
}
