//! CLI surface via `clap`, plus positional selection parsing.
//!
//! Flags must come before the positionals. The positional tail is
//! collected verbatim (hyphen values included) so a flag placed after
//! `<Category> <push|pull>` can be reported as its own error instead of
//! a generic parse failure.

use clap::Parser;
use std::path::PathBuf;

use crate::error::Error;
use crate::rsync::Direction;

const CONFIG_EXAMPLE: &str = r#"CONFIG EXAMPLE (~/.mirra/config.yaml):

ssh:
  user: macuser
  host: mymac.local     # or a reserved LAN IP like 192.168.1.50
  port: 22
  key: /home/linuxuser/.ssh/id_ed25519   # optional

defaults:
  delete: false
  checksum: false
  verbose: true

categories:
  Notes:
    local:  /home/linuxuser/Vault/Notes
    remote: /Users/macuser/Vault/Notes
    exclude:
      - "*.tmp"

push sends local -> remote, pull fetches remote -> local. Both are
one-way; rsync runs with --update so a newer destination file is never
clobbered. Keep both machines' clocks in sync (NTP)."#;

#[derive(Parser)]
#[command(
    name = "mirra",
    version,
    about = "Config-driven one-way rsync wrapper",
    after_help = CONFIG_EXAMPLE
)]
/// Top-level CLI options and positional arguments.
pub struct Cli {
    /// Path to the config file (default: ~/.mirra/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,
    /// Delete files on destination that were deleted at source (can be defaulted in config)
    #[arg(long)]
    pub delete: bool,
    /// Compare by checksums instead of size+mtime (slower; can be defaulted in config)
    #[arg(long)]
    pub checksum: bool,
    /// Disable verbose rsync output
    #[arg(long)]
    pub no_verbose: bool,
    /// <Category> <push|pull>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Split the positional tail into a category name and direction.
///
/// The category is returned verbatim (lookup is case-sensitive); the
/// direction is normalized by its parser.
pub fn parse_selection(args: &[String]) -> Result<(String, Direction), Error> {
    if args.len() < 2 {
        return Err(Error::MissingArguments);
    }
    if args.len() > 2 {
        let extra = &args[2..];
        if let Some(flag) = extra.iter().find(|a| a.starts_with('-')) {
            return Err(Error::FlagAfterPositionals(flag.clone()));
        }
        return Err(Error::ExtraArguments(extra.join(" ")));
    }
    let direction = args[1].parse()?;
    Ok((args[0].clone(), direction))
}
