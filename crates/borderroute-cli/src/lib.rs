//! borderroute CLI library.
//!
//! Command handlers and output rendering for the `borderroute-cli` binary.

pub mod commands;
pub mod output;
