//! CLI subcommand implementations.

pub mod tell;
pub mod watch;
