//! # emu-cli
//!
//! Command-line client for the compute API of the network emulator.
//!
//! Provides commands for:
//! - Starting, stopping and moving compute instances (VNFs)
//! - Listing instances and querying their status
//! - Opening terminals into running VNFs
//!
//! # Architecture
//!
//! The CLI talks plain HTTP/JSON to the emulator's REST endpoint. The
//! [`client::ComputeClient`] issues one request per command; [`output`]
//! renders the JSON response.
//!
//! ```text
//! ┌──────────────┐   HTTP/JSON    ┌──────────────────────────┐
//! │ emu-compute  │◄──────────────►│ /restapi/compute (5001)  │
//! └──────────────┘                └──────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod output;
pub mod terminal;

pub use cli::{Cli, ComputeAction, Format};
pub use client::ComputeClient;
pub use error::CliError;
pub use output::OutputFormat;
