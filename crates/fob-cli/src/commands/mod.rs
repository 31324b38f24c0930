//! Command implementations for the Fob CLI.
//!
//! - [`browsers`] - Target-browser check
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod browsers;

pub use browsers::execute as browsers_execute;
