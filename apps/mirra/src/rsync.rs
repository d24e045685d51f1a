//! Rsync argument construction and default resolution.
//!
//! The builder is a pure function of the loaded config, the selected
//! category, and the per-invocation options; it performs no I/O. Output
//! order is fixed so runs are reproducible.

use std::str::FromStr;

use crate::config::{Category, Config};
use crate::error::Error;

/// Transfer direction. Push sends local -> remote, pull the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Push,
    Pull,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "push" => Ok(Direction::Push),
            "pull" => Ok(Direction::Pull),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Per-invocation intent, built from CLI flags. Never persisted.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub dry_run: bool,
    pub delete: bool,
    pub checksum: bool,
    pub no_verbose: bool,
    pub direction: Direction,
}

/// Always excluded, ahead of any category-specific patterns.
const BUILTIN_EXCLUDES: &[&str] = &[
    ".DS_Store",
    "._*",
    ".Trash*",
    ".obsidian/cache",
    ".git",
    "*.icloud", // iCloud placeholders
];

/// Resolve one boolean: an explicit CLI `true` wins, then the configured
/// default when set, then the fallback. The CLI can only force a value
/// on, never off.
fn resolve_flag(cli: bool, configured: Option<bool>, fallback: bool) -> bool {
    if cli {
        return true;
    }
    configured.unwrap_or(fallback)
}

/// Build the full rsync argument vector for one category and direction.
pub fn build_args(cfg: &Config, cat: &Category, opts: &RunOptions) -> Vec<String> {
    let use_delete = resolve_flag(opts.delete, cfg.defaults.delete, false);
    let use_checksum = resolve_flag(opts.checksum, cfg.defaults.checksum, false);
    let use_verbose = resolve_flag(!opts.no_verbose, cfg.defaults.verbose, true);

    // archive + hardlinks + never clobber a newer destination file
    let mut args: Vec<String> = vec!["-aH".into(), "--protect-args".into(), "--update".into()];
    if use_verbose {
        args.push("-v".into());
    }
    if opts.dry_run {
        args.push("--dry-run".into());
    }
    if use_checksum {
        args.push("--checksum".into());
    }
    if use_delete {
        args.push("--delete".into());
        args.push("--delete-excluded".into());
    }

    for pattern in BUILTIN_EXCLUDES
        .iter()
        .copied()
        .chain(cat.exclude.iter().map(String::as_str))
    {
        args.push("--exclude".into());
        args.push(pattern.into());
    }

    args.push("-e".into());
    args.push(ssh_command(cfg));

    let local = ensure_trailing_slash(&cat.local);
    let remote = format!(
        "{}@{}:{}/",
        cfg.ssh.user,
        cfg.ssh.host,
        cat.remote.trim_end_matches('/')
    );
    match opts.direction {
        Direction::Push => {
            args.push(local);
            args.push(remote);
        }
        Direction::Pull => {
            args.push(remote);
            args.push(local);
        }
    }

    args
}

/// Remote-shell command handed to rsync's `-e`. One string; rsync
/// re-splits it itself.
fn ssh_command(cfg: &Config) -> String {
    let mut cmd = String::from("ssh");
    if let Some(key) = cfg.ssh.key.as_deref() {
        cmd.push_str(" -i ");
        cmd.push_str(&shell_escape(key));
    }
    if let Some(port) = cfg.ssh.non_default_port() {
        cmd.push_str(&format!(" -p {port}"));
    }
    cmd
}

/// Collapse any run of trailing separators to exactly one.
fn ensure_trailing_slash(p: &str) -> String {
    format!("{}/", p.trim_end_matches('/'))
}

/// Quote a path containing whitespace unless it already carries quotes.
/// Light on purpose: rsync gets --protect-args.
fn shell_escape(s: &str) -> String {
    let quoted = s.starts_with('\'') || s.ends_with('\'');
    if !quoted && s.contains([' ', '\t']) {
        format!("'{s}'")
    } else {
        s.to_string()
    }
}
