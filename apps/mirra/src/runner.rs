//! Rsync subprocess invocation.
//!
//! The argument vector is prepared elsewhere; this module locates the
//! executable, echoes the command line, and blocks until the child
//! exits with its stdout/stderr streamed through unmodified.

use std::process::Command;

use owo_colors::OwoColorize;

use crate::error::Error;

/// Run rsync with the prepared arguments.
pub fn run(args: &[String]) -> Result<(), Error> {
    let rsync = which::which("rsync").map_err(Error::RsyncNotFound)?;

    let echo = format!("running: rsync {}", args.join(" "));
    if use_colors() {
        println!("{}", echo.bright_black());
    } else {
        println!("{echo}");
    }

    let status = Command::new(rsync)
        .args(args)
        .status()
        .map_err(Error::Spawn)?;
    if !status.success() {
        return Err(Error::RsyncFailed(status));
    }
    Ok(())
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
