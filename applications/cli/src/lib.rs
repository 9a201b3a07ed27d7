//! Setlist command-line editor
//!
//! Configuration loading, subcommand execution and terminal rendering for
//! the `setlist` binary.

pub mod commands;
pub mod config;
pub mod render;
