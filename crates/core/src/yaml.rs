use std::{env, fs::File, io::Read, path::Path};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The file name `start` looks for in the project directory.
pub const CONFIG_FILE_NAME: &str = "keygate.yaml";

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS; absent means any origin
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub allowed_origins: Option<Vec<String>>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: default_port(), allowed_origins: None }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetupConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub api_config: ApiConfig,
    #[serde(default)]
    pub api_keys: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ReadYamlError {
    #[error("Can not find yaml")]
    CanNotFindYaml,

    #[error("Can not read yaml")]
    CanNotReadYaml,

    #[error("Setup config is invalid yaml and does not match the struct - {0}")]
    SetupConfigInvalidYaml(String),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),

    #[error("Environment variable pattern is invalid: {0}")]
    InvalidEnvironmentPattern(#[from] regex::Error),

    #[error("No api keys configured in the yaml")]
    NoApiKeysConfigured,
}

/// Replaces every `${VAR}` with the value of `VAR` from the environment.
fn substitute_env_variables(contents: &str) -> Result<String, ReadYamlError> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;

    let mut missing: Option<String> = None;
    let result = re.replace_all(contents, |caps: &Captures| match env::var(&caps[1]) {
        Ok(val) => val,
        Err(_) => {
            missing.get_or_insert_with(|| caps[1].to_string());
            String::new()
        }
    });

    match missing {
        Some(var_name) => Err(ReadYamlError::EnvironmentVariableNotFound(var_name)),
        None => Ok(result.into_owned()),
    }
}

/// Parses the contents of a keygate config file.
pub fn parse(contents: &str, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let substituted_contents =
        if raw_yaml { contents.to_string() } else { substitute_env_variables(contents)? };

    let config: SetupConfig = serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadYamlError::SetupConfigInvalidYaml(e.to_string()))?;

    if config.api_keys.iter().all(|key| key.is_empty()) {
        return Err(ReadYamlError::NoApiKeysConfigured);
    }

    Ok(config)
}

/// Reads and parses the keygate configuration YAML file.
pub fn read(file_path: &Path, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let mut file = File::open(file_path).map_err(|_| ReadYamlError::CanNotFindYaml)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|_| ReadYamlError::CanNotReadYaml)?;

    parse(&contents, raw_yaml)
}
