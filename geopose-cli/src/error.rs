//! Error types emitted by the GeoPose CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use geopose_client::{ClientBuildError, SendError, TransportError};
use geopose_core::SchemaError;
use thiserror::Error;

/// Errors emitted by the GeoPose CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Two mutually exclusive options were both supplied.
    #[error("--{first} and --{second} cannot be used together")]
    ConflictingArguments {
        /// First flag name.
        first: &'static str,
        /// Second flag name.
        second: &'static str,
    },
    /// The endpoint name is not recognised.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Reading a JSON document failed.
    #[error("failed to read {path:?}: {source}")]
    ReadDocument {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A JSON document failed schema validation.
    #[error("{path:?} is invalid: {source}")]
    InvalidDocument {
        /// Document path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SchemaError,
    },
    /// The service URL could not be combined with the endpoint.
    #[error(transparent)]
    ServiceUrl(TransportError),
    /// Constructing the HTTP client failed.
    #[error(transparent)]
    BuildClient(#[from] ClientBuildError),
    /// Building the Tokio runtime failed.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The send failed.
    #[error("send failed: {0}")]
    Send(#[from] SendError),
    /// Serializing the service response failed.
    #[error("failed to serialize service response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
