//! Compute command implementation.
//!
//! Dispatches one of the six compute actions:
//! - `start`, `stop`, `move`, `status` act on one instance and dump the
//!   JSON response
//! - `list` renders the instances of a datacenter as a table
//! - `xterm` opens terminals into running VNFs

use std::io::Write;

use tracing::{debug, warn};

use crate::cli::{Cli, ComputeAction};
use crate::client::{ComputeClient, MoveRequest, StartRequest};
use crate::error::CliError;
use crate::output::{ContainerTable, OutputFormat, RawResponse};
use crate::terminal::{TerminalLauncher, XtermLauncher};

/// Datacenter label the emulator answers with instances of every datacenter.
pub const ALL_DATACENTERS: &str = "None";

/// Printed when an action name has no handler.
pub const NOT_IMPLEMENTED: &str = "Command not implemented.";

/// Compute command executor.
pub struct ComputeCommand<L = XtermLauncher> {
    client: ComputeClient,
    launcher: L,
}

impl ComputeCommand {
    /// Create a compute command talking to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_launcher(endpoint, XtermLauncher::new())
    }
}

impl<L: TerminalLauncher> ComputeCommand<L> {
    /// Create a compute command with a custom terminal launcher.
    #[must_use]
    pub fn with_launcher(endpoint: impl Into<String>, launcher: L) -> Self {
        Self {
            client: ComputeClient::new(endpoint),
            launcher,
        }
    }

    /// The underlying API client.
    #[must_use]
    pub fn client(&self) -> &ComputeClient {
        &self.client
    }

    /// Execute the action selected on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if a required flag is missing, the request fails, or
    /// output fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &Cli,
    ) -> Result<(), CliError> {
        self.execute_action(writer, format, args.command, args).await
    }

    /// Execute an action looked up by name.
    ///
    /// Unknown names print [`NOT_IMPLEMENTED`] and succeed.
    ///
    /// # Errors
    ///
    /// Same as [`ComputeCommand::execute`].
    pub async fn execute_named<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        name: &str,
        args: &Cli,
    ) -> Result<(), CliError> {
        let Some(action) = ComputeAction::from_name(name) else {
            writeln!(writer, "{NOT_IMPLEMENTED}")?;
            return Ok(());
        };
        self.execute_action(writer, format, action, args).await
    }

    async fn execute_action<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        action: ComputeAction,
        args: &Cli,
    ) -> Result<(), CliError> {
        debug!(action = action.name(), endpoint = %self.client.endpoint(), "Executing compute action");

        match action {
            ComputeAction::Start => {
                let (datacenter, name) = instance(args, action)?;
                if !args.cpu_percent.is_empty() {
                    warn!(cpu_percent = %args.cpu_percent, "--cpu-percent is not supported by the compute API, ignoring");
                }
                let response = self
                    .client
                    .start(datacenter, name, &start_request(args))
                    .await?;
                format.write(writer, &RawResponse(response))?;
            }
            ComputeAction::Stop => {
                let (datacenter, name) = instance(args, action)?;
                let response = self.client.stop(datacenter, name).await?;
                format.write(writer, &RawResponse(response))?;
            }
            ComputeAction::Move => {
                let datacenter = present(args.datacenter.as_deref())
                    .or_else(|| present(Some(args.origin.as_str())))
                    .ok_or_else(|| missing("--datacenter or --origin", action))?;
                let name = required(args.name.as_deref(), "--name", action)?;
                let destination = required(Some(args.destination.as_str()), "--destination", action)?;
                let request = MoveRequest {
                    destination: destination.to_string(),
                };
                let response = self.client.move_instance(datacenter, name, &request).await?;
                format.write(writer, &RawResponse(response))?;
            }
            ComputeAction::Status => {
                let (datacenter, name) = instance(args, action)?;
                let response = self.client.status(datacenter, name).await?;
                format.write(writer, &RawResponse(response))?;
            }
            ComputeAction::List => {
                let datacenter = present(args.datacenter.as_deref()).unwrap_or(ALL_DATACENTERS);
                let listing = self.client.list(datacenter).await?;
                let table = ContainerTable::from_listing(&listing)?;
                format.write(writer, &table)?;
            }
            ComputeAction::Xterm => {
                if args.vnf_names.is_empty() {
                    warn!("No VNF names given, nothing to open");
                }
                for vnf in &args.vnf_names {
                    self.launcher.launch(vnf)?;
                }
            }
        }
        Ok(())
    }
}

/// Build the `start` body from the command line.
#[must_use]
pub fn start_request(args: &Cli) -> StartRequest {
    StartRequest {
        image: args.image.clone(),
        command: args.docker_command.clone(),
        network: args.network.clone(),
        environment: args.environment.clone(),
        volume: args.volume.clone(),
        cpu_shares: args.cpu_shares.clone(),
        cpu_period: args.cpu_period.clone(),
        cpu_quota: args.cpu_quota.clone(),
        mem_limit: args.mem_limit.clone(),
    }
}

fn instance(args: &Cli, action: ComputeAction) -> Result<(&str, &str), CliError> {
    let datacenter = required(args.datacenter.as_deref(), "--datacenter", action)?;
    let name = required(args.name.as_deref(), "--name", action)?;
    Ok((datacenter, name))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required<'a>(
    value: Option<&'a str>,
    flag: &str,
    action: ComputeAction,
) -> Result<&'a str, CliError> {
    present(value).ok_or_else(|| missing(flag, action))
}

fn missing(flag: &str, action: ComputeAction) -> CliError {
    CliError::InvalidArgument(format!("{flag} is required for '{}'", action.name()))
}
