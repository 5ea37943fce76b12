use std::path::Path;

use keygate_core::{CONFIG_FILE_NAME, keygate_info, start};

use crate::commands::error::ProjectStartupError;

pub async fn handle_start(project_path: &Path) -> Result<(), ProjectStartupError> {
    keygate_info!("Loading from path {:?}", project_path);
    let keygate_yaml_path = project_path.join(CONFIG_FILE_NAME);
    if !keygate_yaml_path.exists() {
        return Err(ProjectStartupError::NotInitialized(format!(
            "No {} found. Please run this command from your project root or pass --path.",
            CONFIG_FILE_NAME
        )));
    }

    keygate_info!("Starting keygate...");
    start(project_path).await?;

    Ok(())
}
