//! Send command implementation for the GeoPose CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use geopose_client::{
    Endpoint, GeoPoseClient, GeoPoseClientConfig, ServiceResponse, Transport, TransportOptions,
    endpoint_url,
};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::files::{read_document, require_existing};
use crate::{
    ARG_SEND_ENDPOINT, ARG_SEND_REQUEST, ARG_SEND_SERVICE_URL, CliError, ENV_SEND_REQUEST,
    ENV_SEND_SERVICE_URL,
};

/// CLI arguments for the `send` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "send",
    long_about = "POST a JSON GeoPose request to a service and print the \
                 service's response. The endpoint is resolved relative to \
                 the service URL.",
    about = "Send a GeoPose request to a service"
)]
#[ortho_config(prefix = "GEOPOSE")]
pub(crate) struct SendArgs {
    /// Base URL of the GeoPose service.
    #[arg(long = ARG_SEND_SERVICE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) service_url: Option<String>,
    /// Path to a JSON GeoPose request.
    #[arg(long = ARG_SEND_REQUEST, value_name = "path")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Endpoint to call: `geopose` (default) or `objects`.
    #[arg(long = ARG_SEND_ENDPOINT, value_name = "name")]
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    /// Send without validating the request or the response.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) skip_validation: bool,
    /// Request timeout in seconds.
    #[arg(long, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl SendArgs {
    pub(crate) fn into_config(self) -> Result<SendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SendConfig::try_from(merged)
    }
}

/// Resolved `send` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SendConfig {
    /// Fully resolved endpoint URL.
    pub(crate) url: Url,
    /// Path to the JSON request file.
    pub(crate) request: Utf8PathBuf,
    /// Client settings.
    pub(crate) client: GeoPoseClientConfig,
}

impl TryFrom<SendArgs> for SendConfig {
    type Error = CliError;

    fn try_from(args: SendArgs) -> Result<Self, Self::Error> {
        let service_url = args.service_url.ok_or(CliError::MissingArgument {
            field: ARG_SEND_SERVICE_URL,
            env: ENV_SEND_SERVICE_URL,
        })?;
        let request = args.request.ok_or(CliError::MissingArgument {
            field: ARG_SEND_REQUEST,
            env: ENV_SEND_REQUEST,
        })?;
        let endpoint = args
            .endpoint
            .as_deref()
            .map(str::parse::<Endpoint>)
            .transpose()
            .map_err(CliError::InvalidEndpoint)?
            .unwrap_or_default();
        let url = endpoint_url(&service_url, endpoint.path()).map_err(CliError::ServiceUrl)?;

        let mut client = GeoPoseClientConfig::default().validate_request(!args.skip_validation);
        if let Some(secs) = args.timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            url,
            request,
            client,
        })
    }
}

pub(crate) fn run_send(args: SendArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let client = GeoPoseClient::with_config(&config.client)?;
    let mut stdout = std::io::stdout().lock();
    run_send_with(&config, &client, &mut stdout)
}

pub(crate) fn run_send_with<T: Transport>(
    config: &SendConfig,
    client: &GeoPoseClient<T>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.request, ARG_SEND_REQUEST)?;
    let payload = read_document(&config.request)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    debug!("sending {} to {}", config.request, config.url);
    let response = runtime.block_on(client.send_request(
        config.url.as_str(),
        &payload,
        TransportOptions::default(),
    ))?;
    write_response(writer, &response)
}

fn write_response(writer: &mut dyn Write, response: &ServiceResponse) -> Result<(), CliError> {
    let value = response.to_value().map_err(CliError::SerializeResponse)?;
    let payload = serde_json::to_string_pretty(&value).map_err(CliError::SerializeResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SendConfig, CliError> {
    let merged = SendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SendConfig::try_from(merged)
}
