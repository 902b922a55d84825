//! qsv SDK - Typed access to the qsv CSV toolkit
//!
//! Provides:
//! - Command descriptors that compile typed parameters into qsv arguments
//! - A registry of every modelled subcommand
//! - A synchronous invoker for the qsv executable
//! - Data file paths and loading of the statistics JSONL qsv writes
//!
//! The crate only emits `tracing` events; install a subscriber to see them.

pub mod commands;
pub mod config;
pub mod error;
pub mod invoker;
pub mod model;
pub mod params;

pub use commands::{CommandKind, QsvCommand, all_command_kinds, lookup};
pub use config::QsvConfig;
pub use error::{QsvError, QsvResult};
pub use invoker::Invoker;
pub use model::{DataFile, DataFormat, DataProduct, StatsFile, StatsRecord, load_stats};
pub use params::{ParamSpec, ParamValue, Params};
