use crate::format::{render, Formattable, FormattingError, OutputFormat};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use serde_yaml;
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "m365";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIG_DIR_ENV: &str = "M365_CONFIG_DIR";

pub const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com";
pub const DEFAULT_AZMGMT_URL: &str = "https://management.azure.com/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause}")]
    FailedToLoadData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write configuration data to file, because of: {cause}")]
    FailedToWriteData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{url} cannot be used as a base URL")]
    InvalidBaseUrl { url: String },
    #[error("invalid value for property {name}: {value}")]
    InvalidPropertyValue { name: String, value: String },
    #[error("{cause}")]
    FormattingError {
        #[from]
        cause: FormattingError,
    },
}

fn default_graph_url() -> Url {
    // constant is a valid absolute URL
    Url::parse(DEFAULT_GRAPH_URL).expect("default Graph URL")
}

fn default_azmgmt_url() -> Url {
    Url::parse(DEFAULT_AZMGMT_URL).expect("default Azure management URL")
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Endpoints and HTTP settings shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Microsoft Graph base URL (without the version segment)
    #[serde(default = "default_graph_url")]
    graph_url: Url,
    /// Azure Resource Manager base URL
    #[serde(default = "default_azmgmt_url")]
    azmgmt_url: Url,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    timeout: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            graph_url: default_graph_url(),
            azmgmt_url: default_azmgmt_url(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Configuration {
    pub fn graph_url(&self) -> &Url {
        &self.graph_url
    }

    pub fn azmgmt_url(&self) -> &Url {
        &self.azmgmt_url
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_graph_url(&mut self, url: Url) {
        self.graph_url = url;
    }

    pub fn set_azmgmt_url(&mut self, url: Url) {
        self.azmgmt_url = url;
    }

    pub fn set_timeout(&mut self, timeout: u64) -> Result<(), ConfigurationError> {
        if timeout == 0 {
            return Err(ConfigurationError::InvalidPropertyValue {
                name: "timeout".to_string(),
                value: timeout.to_string(),
            });
        }
        self.timeout = timeout;
        Ok(())
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Loads the default configuration file, falling back to defaults when
    /// the file does not exist yet.
    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", default_file_path.display());

        if !default_file_path.exists() {
            debug!("Configuration file not found, using defaults");
            return Ok(Configuration::default());
        }

        Configuration::load_from_file(default_file_path)
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        let content = fs::read_to_string(&path).map_err(|cause| {
            ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            }
        })?;

        if content.trim().is_empty() {
            return Ok(Configuration::default());
        }

        serde_yaml::from_str(&content).map_err(|cause| ConfigurationError::FailedToLoadData {
            cause: Box::new(cause),
        })
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        // make sure the parent directory exists
        match path.parent() {
            Some(directory) => {
                if fs::create_dir_all(directory).is_err() {
                    return Err(ConfigurationError::FailedToFindConfigurationDirectory);
                }
            }
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })?;
        self.write(Box::new(file))
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }
}

impl Formattable for Configuration {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        let value = serde_json::to_value(self)?;
        match f {
            // a single record, so CSV gets a one-row table
            OutputFormat::Csv(_) => render(&serde_json::Value::Array(vec![value]), f),
            _ => render(&value, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormatOptions;

    #[test]
    fn test_defaults() {
        let configuration = Configuration::default();
        assert_eq!(configuration.graph_url().as_str(), "https://graph.microsoft.com/");
        assert_eq!(
            configuration.azmgmt_url().as_str(),
            "https://management.azure.com/"
        );
        assert_eq!(configuration.timeout(), 60);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");

        let mut configuration = Configuration::default();
        configuration.set_graph_url(Url::parse("https://graph.microsoft.us").unwrap());
        configuration.set_timeout(15).unwrap();
        configuration.save(&path).unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded, configuration);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "timeout: 5\n").unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded.timeout(), 5);
        assert_eq!(loaded.graph_url(), Configuration::default().graph_url());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut configuration = Configuration::default();
        assert!(matches!(
            configuration.set_timeout(0),
            Err(ConfigurationError::InvalidPropertyValue { .. })
        ));
    }

    #[test]
    fn test_csv_format_has_header_row() {
        let options = OutputFormatOptions {
            with_headers: true,
            pretty: false,
        };
        let output = Configuration::default()
            .format(&OutputFormat::Csv(options))
            .unwrap();
        assert!(output.starts_with("graph_url,azmgmt_url,timeout\n"));
    }
}
