//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which applies the
//! bootstrap env files once and then routes CLI subcommands to their
//! implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod get;
pub mod list;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
