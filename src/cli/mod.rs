//! The interactive command loop
//!
//! This module contains the line dispatcher that bridges user input with the
//! service layer, plus the command table backing the `list` help output.

pub mod commands;
pub mod repl;

pub use commands::{CommandSpec, COMMANDS};
pub use repl::run;
