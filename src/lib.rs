#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

pub mod cli;
pub use cli::Cli;

pub mod config;

pub mod errors;
pub use errors::{Error, Result};

pub mod frontend;

pub mod games;

pub mod logging;
