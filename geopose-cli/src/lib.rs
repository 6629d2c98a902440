//! Command-line interface for GeoPose services.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod files;
mod send;
mod validate;

pub use error::CliError;

use send::{SendArgs, run_send};
use validate::{ValidateArgs, run_validate};

const ARG_VALIDATE_REQUEST: &str = "request";
const ARG_VALIDATE_RESPONSE: &str = "response";
const ENV_VALIDATE_REQUEST: &str = "GEOPOSE_CMDS_VALIDATE_REQUEST";
const ARG_SEND_SERVICE_URL: &str = "service-url";
const ARG_SEND_REQUEST: &str = "request";
const ARG_SEND_ENDPOINT: &str = "endpoint";
const ENV_SEND_SERVICE_URL: &str = "GEOPOSE_CMDS_SEND_SERVICE_URL";
const ENV_SEND_REQUEST: &str = "GEOPOSE_CMDS_SEND_REQUEST";

/// Run the GeoPose CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, validation or
/// the send fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Send(args) => run_send(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "geopose",
    about = "Validate GeoPose documents and query GeoPose services",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a request or response document against its schema.
    Validate(ValidateArgs),
    /// POST a request document to a service.
    Send(SendArgs),
}

#[cfg(test)]
mod tests;
