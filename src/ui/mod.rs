//! Terminal output for CLI commands.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output in tests
//!
//! # Example
//!
//! ```
//! use server_env::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("2");
//! ui.success("Resolved");
//! assert!(ui.has_message("2"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print command output. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);
}
