//! Subcommand implementations.

pub mod check;
pub mod classes;
pub mod init;
pub mod render;
pub mod resolve;
