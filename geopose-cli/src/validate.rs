//! Validate command implementation for the GeoPose CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geopose_core::schema::{self, RequestSchema, ResponseSchema, Schema};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::{read_document, require_existing};
use crate::{ARG_VALIDATE_REQUEST, ARG_VALIDATE_RESPONSE, CliError, ENV_VALIDATE_REQUEST};

/// CLI arguments for the `validate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "validate",
    long_about = "Check a JSON document against the GeoPose request or \
                 response schema. Exactly one of --request and --response \
                 must be given.",
    about = "Validate a GeoPose request or response document"
)]
#[ortho_config(prefix = "GEOPOSE")]
pub(crate) struct ValidateArgs {
    /// Path to a JSON GeoPose request.
    #[arg(long = ARG_VALIDATE_REQUEST, value_name = "path")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Path to a JSON GeoPose response.
    #[arg(long = ARG_VALIDATE_RESPONSE, value_name = "path")]
    #[serde(default)]
    pub(crate) response: Option<Utf8PathBuf>,
}

impl ValidateArgs {
    pub(crate) fn into_config(self) -> Result<ValidateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ValidateConfig::try_from(merged)
    }
}

/// Which schema a document is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentKind {
    Request,
    Response,
}

impl DocumentKind {
    const fn field(self) -> &'static str {
        match self {
            Self::Request => ARG_VALIDATE_REQUEST,
            Self::Response => ARG_VALIDATE_RESPONSE,
        }
    }
}

/// Resolved `validate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidateConfig {
    pub(crate) kind: DocumentKind,
    pub(crate) path: Utf8PathBuf,
}

impl TryFrom<ValidateArgs> for ValidateConfig {
    type Error = CliError;

    fn try_from(args: ValidateArgs) -> Result<Self, Self::Error> {
        match (args.request, args.response) {
            (Some(_), Some(_)) => Err(CliError::ConflictingArguments {
                first: ARG_VALIDATE_REQUEST,
                second: ARG_VALIDATE_RESPONSE,
            }),
            (Some(path), None) => Ok(Self {
                kind: DocumentKind::Request,
                path,
            }),
            (None, Some(path)) => Ok(Self {
                kind: DocumentKind::Response,
                path,
            }),
            (None, None) => Err(CliError::MissingArgument {
                field: ARG_VALIDATE_REQUEST,
                env: ENV_VALIDATE_REQUEST,
            }),
        }
    }
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_validate_with(&config, &mut stdout)
}

pub(crate) fn run_validate_with(
    config: &ValidateConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.path, config.kind.field())?;
    let schema_name = validate_document(config.kind, &config.path)?;
    writeln!(writer, "{}: valid {schema_name}", config.path).map_err(CliError::WriteOutput)
}

/// Check the document at `path` and return the schema name it conforms to.
pub(crate) fn validate_document(
    kind: DocumentKind,
    path: &Utf8Path,
) -> Result<&'static str, CliError> {
    let text = read_document(path)?;
    let invalid = |source| CliError::InvalidDocument {
        path: path.to_path_buf(),
        source,
    };
    match kind {
        DocumentKind::Request => {
            schema::validate(&RequestSchema, &text).map_err(invalid)?;
            Ok(RequestSchema.name())
        }
        DocumentKind::Response => {
            schema::validate(&ResponseSchema, &text).map_err(invalid)?;
            Ok(ResponseSchema.name())
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ValidateConfig, CliError> {
    let merged = ValidateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ValidateConfig::try_from(merged)
}
