use m365::{
    cli::execute_command,
    commands::{create_cli_commands, PARAMETER_DEBUG, PARAMETER_VERBOSE},
    configuration::Configuration,
    error::CliError,
    error_utils::report_error,
};
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // Intialize the logging subsystem; RUST_LOG wins over the flags
    let default_level = if matches.get_flag(PARAMETER_DEBUG) {
        "debug"
    } else if matches.get_flag(PARAMETER_VERBOSE) {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match Configuration::load_default() {
        Ok(configuration) => execute_command(configuration, &matches).await,
        Err(e) => Err(CliError::from(e)),
    };

    if let Err(e) = result {
        report_error(&e);
        ::std::process::exit(e.exit_code().into());
    }
}
