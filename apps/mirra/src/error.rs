//! Error types for mirra.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for mirra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can fail between argument parsing and the rsync exit.
/// All of these are fatal; the binary prints one diagnostic line and
/// exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer than two positional arguments were supplied
    #[error("missing required arguments: <Category> <push|pull>")]
    MissingArguments,

    /// A flag-like token appeared after the positional arguments
    #[error("unexpected flag {0:?} after positional args; flags must come before <Category> <push|pull>")]
    FlagAfterPositionals(String),

    /// More than two positional arguments were supplied
    #[error("unexpected extra arguments: {0}")]
    ExtraArguments(String),

    /// The direction argument was neither `push` nor `pull`
    #[error("direction must be 'push' or 'pull', got {0:?}")]
    InvalidDirection(String),

    /// Config file could not be read
    #[error("load config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file did not deserialize
    #[error("parse config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The categories mapping was absent or empty
    #[error("no categories defined in config")]
    NoCategories,

    /// The requested category is not in the config
    #[error("category {0:?} not found in config")]
    CategoryNotFound(String),

    /// ssh.user or ssh.host was left empty
    #[error("ssh.user and ssh.host are required in config")]
    MissingCredentials,

    /// No rsync executable on PATH
    #[error("rsync executable not found in PATH")]
    RsyncNotFound(#[source] which::Error),

    /// rsync could not be spawned
    #[error("failed to launch rsync: {0}")]
    Spawn(std::io::Error),

    /// rsync ran and reported failure; its own output has the details
    #[error("rsync failed with {0}")]
    RsyncFailed(ExitStatus),
}
