//! CLI commands.

pub mod build;
pub mod check;
pub mod config;
pub mod copy;
pub mod init;
pub mod serve;
