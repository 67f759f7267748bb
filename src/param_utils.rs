use crate::commands::params::{PARAMETER_HEADERS, PARAMETER_OUTPUT, PARAMETER_PRETTY};
use crate::format::{OutputFormat, OutputFormatOptions};
use clap::ArgMatches;
use tracing::trace;

/// Resolves the output mode from the global `--output`, `--headers` and `--pretty` arguments.
///
/// The arguments are global, so any level of the parsed command tree can be
/// passed in. An unknown or missing value falls back to JSON.
pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
    trace!("Resolving output format options...");

    let format = matches
        .get_one::<String>(PARAMETER_OUTPUT)
        .map(String::as_str)
        .unwrap_or(crate::format::JSON);
    let with_headers = matches.get_flag(PARAMETER_HEADERS);
    let pretty = matches.get_flag(PARAMETER_PRETTY);

    trace!("Format: {}", format);
    trace!("With headers: {}", with_headers);
    trace!("Pretty: {}", pretty);

    let options = OutputFormatOptions {
        with_headers,
        pretty,
    };

    OutputFormat::from_string_with_options(format, options.clone())
        .unwrap_or(OutputFormat::Json(options))
}
