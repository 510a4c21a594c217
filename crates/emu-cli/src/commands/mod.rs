//! CLI command implementations.
//!
//! - [`compute`] - Compute instance management against the emulator REST API

pub mod compute;

pub use compute::ComputeCommand;
