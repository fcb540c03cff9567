//! Navigator CLI library.
//!
//! Command handlers, output formatting and terminal styling for the
//! `navigator` binary.

pub mod commands;
pub mod output;
pub mod terminal;
