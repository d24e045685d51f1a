//! mirra: config-driven one-way rsync wrapper.
//!
//! Categories pair a local path with a remote path; `mirra <Category>
//! <push|pull>` builds the rsync command line from the per-user config
//! and hands the transfer itself to rsync.

pub mod cli;
pub mod config;
pub mod error;
pub mod rsync;
pub mod runner;

pub use error::{Error, Result};
