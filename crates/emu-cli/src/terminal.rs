//! Terminal windows into running VNF containers.
//!
//! The emulator names the container of VNF `x` as `mn.x`; a terminal is an
//! `xterm` running `docker exec` into that container. Launches are
//! fire-and-forget: the child is never waited on.

use tokio::process::Command;
use tracing::debug;

use crate::error::CliError;

/// Terminal emulator launched by default.
pub const DEFAULT_TERMINAL: &str = "xterm";

/// Prefix the emulator puts in front of VNF container names.
pub const CONTAINER_PREFIX: &str = "mn.";

/// Container name for a VNF.
#[must_use]
pub fn container_name(vnf: &str) -> String {
    format!("{CONTAINER_PREFIX}{vnf}")
}

/// Arguments passed to the terminal emulator for a VNF.
#[must_use]
pub fn xterm_args(vnf: &str) -> Vec<String> {
    vec![
        "-xrm".into(),
        "XTerm.vt100.allowTitleOps: false".into(),
        "-T".into(),
        vnf.into(),
        "-e".into(),
        format!("docker exec -it {} /bin/bash", container_name(vnf)),
    ]
}

/// Opens terminals into VNFs.
pub trait TerminalLauncher {
    /// Launch a terminal for `vnf` without waiting for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal process cannot be started.
    fn launch(&self, vnf: &str) -> Result<(), CliError>;
}

/// Launches `xterm` windows.
#[derive(Debug, Clone)]
pub struct XtermLauncher {
    program: String,
}

impl XtermLauncher {
    /// Launcher for the default terminal emulator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_TERMINAL)
    }

    /// Launcher for an xterm-compatible program.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this launcher starts.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for XtermLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalLauncher for XtermLauncher {
    fn launch(&self, vnf: &str) -> Result<(), CliError> {
        let child = Command::new(&self.program)
            .args(xterm_args(vnf))
            .spawn()
            .map_err(|source| CliError::Spawn {
                program: self.program.clone(),
                vnf: vnf.to_string(),
                source,
            })?;

        debug!(vnf, program = %self.program, pid = ?child.id(), "Terminal launched");
        Ok(())
    }
}
