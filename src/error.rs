use thiserror::Error;

use crate::{
    auth::AuthError,
    configuration::ConfigurationError,
    error_utils::{unwrap_remote_message, RemoteError},
    exit_codes::M365ExitCode,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Options were rejected before any request was made
    #[error("{0}")]
    ValidationError(String),
    /// A remote call failed; the message is already unwrapped
    #[error("{0}")]
    CommandError(String),
    /// No usable access token, or the credential store failed
    #[error("{0}")]
    AuthenticationError(String),
    /// Error related to JSON serialization/deserialization
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// The HTTP client could not be constructed
    #[error("Failed to initialize HTTP client: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

impl From<RemoteError> for CliError {
    fn from(error: RemoteError) -> Self {
        match error {
            RemoteError::Unauthenticated(message) => CliError::AuthenticationError(message),
            RemoteError::InvalidBaseUrl(url) => {
                CliError::ConfigurationError(ConfigurationError::InvalidBaseUrl { url })
            }
            other => CliError::CommandError(unwrap_remote_message(&other)),
        }
    }
}

impl From<AuthError> for CliError {
    fn from(error: AuthError) -> Self {
        CliError::AuthenticationError(error.to_string())
    }
}

impl CliError {
    /// Get the appropriate exit code for this error
    ///
    /// - `UsageError` for unsupported commands, missing arguments and rejected options
    /// - `ConfigError` for configuration errors
    /// - `DataError` for formatting or JSON errors
    /// - `AuthError` for missing tokens
    /// - `ApiError` for failed remote calls
    pub fn exit_code(&self) -> M365ExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => M365ExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => M365ExitCode::UsageError,
            CliError::ValidationError(_) => M365ExitCode::UsageError,
            CliError::ConfigurationError(_) => M365ExitCode::ConfigError,
            CliError::FormattingError(_) => M365ExitCode::DataError,
            CliError::JsonError(_) => M365ExitCode::DataError,
            CliError::AuthenticationError(_) => M365ExitCode::AuthError,
            CliError::CommandError(_) => M365ExitCode::ApiError,
            CliError::HttpClientError(_) => M365ExitCode::SoftwareError,
        }
    }
}
