//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod compare;
mod config;

pub use compare::{run_compare, CompareRequest, InputFormat};
pub use config::{effective_config, run_init_config, run_show_config};
