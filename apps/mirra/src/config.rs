//! Configuration document loading and validation.
//!
//! Mirra reads one document per invocation (default
//! `~/.mirra/config.yaml`) and treats it as read-only afterwards.
//! Files ending in `.toml` go through the TOML parser, everything else
//! through YAML. Absent optional fields deserialize to their zero values
//! so that missing credentials surface as their own error instead of a
//! parse failure.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Default SSH port; a configured port only reaches the transport string
/// when it differs from this.
pub const DEFAULT_SSH_PORT: u16 = 22;

#[derive(Debug, Default, Clone, Deserialize)]
/// Remote endpoint reached over SSH.
pub struct SshEndpoint {
    #[serde(default)]
    pub user: String,
    /// Hostname or IP (e.g. mymac.local)
    #[serde(default)]
    pub host: String,
    /// Defaults to 22 when unset or zero
    #[serde(default)]
    pub port: Option<u16>,
    /// Path to a private key (optional)
    #[serde(default)]
    pub key: Option<String>,
}

impl SshEndpoint {
    /// User and host must both be present before any sync runs.
    pub fn ensure_credentials(&self) -> Result<(), Error> {
        if self.user.is_empty() || self.host.is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }

    /// The configured port, only when it actually deviates from 22.
    pub fn non_default_port(&self) -> Option<u16> {
        self.port.filter(|&p| p != 0 && p != DEFAULT_SSH_PORT)
    }
}

#[derive(Debug, Clone, Deserialize)]
/// A named local/remote path pair with its own exclude rules.
pub struct Category {
    /// Absolute path recommended
    pub local: String,
    /// Absolute path on the remote
    pub remote: String,
    /// Extra excludes for this category
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
/// Configured defaults for the per-run booleans. `None` means no
/// opinion, which is distinct from an explicit `false`.
pub struct SyncDefaults {
    /// Mirror deletions
    pub delete: Option<bool>,
    /// Compare by checksum (slower, safer)
    pub checksum: Option<bool>,
    /// rsync -v
    pub verbose: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
/// Root configuration document: one endpoint, one defaults record, and
/// the category mapping (at least one entry required).
pub struct Config {
    #[serde(default)]
    pub ssh: SshEndpoint,
    #[serde(default)]
    pub defaults: SyncDefaults,
    #[serde(default)]
    pub categories: HashMap<String, Category>,
}

/// Per-user config location; `./config.yaml` when home is unknown.
pub fn default_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".mirra").join("config.yaml"),
        None => PathBuf::from("./config.yaml"),
    }
}

/// Load and validate a config document.
pub fn load(path: &Path) -> Result<Config, Error> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&raw).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(&raw).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };
    if cfg.categories.is_empty() {
        return Err(Error::NoCategories);
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml_keeps_tristate_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "{}",
            r#"
ssh:
  user: alice
  host: example.com
defaults:
  delete: false
categories:
  Notes:
    local: /home/u/Notes
    remote: /remote/Notes
"#
        )
        .unwrap();

        let cfg = load(&path).unwrap();
        // explicit false must stay distinguishable from unset
        assert_eq!(cfg.defaults.delete, Some(false));
        assert_eq!(cfg.defaults.checksum, None);
        assert_eq!(cfg.defaults.verbose, None);
        assert_eq!(cfg.ssh.user, "alice");
        assert!(cfg.categories.contains_key("Notes"));
        assert!(cfg.categories["Notes"].exclude.is_empty());
    }

    #[test]
    fn test_load_toml_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[ssh]
user = "alice"
host = "example.com"
port = 2222

[defaults]
verbose = true

[categories.Piano]
local = "/home/u/Piano"
remote = "/remote/Piano"
exclude = ["*.wav"]
"#,
        )
        .unwrap();

        let cfg = load(&path).unwrap();
        assert_eq!(cfg.ssh.port, Some(2222));
        assert_eq!(cfg.defaults.verbose, Some(true));
        assert_eq!(cfg.categories["Piano"].exclude, vec!["*.wav"]);
    }

    #[test]
    fn test_load_rejects_missing_categories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "ssh:\n  user: alice\n  host: example.com\n").unwrap();

        assert!(matches!(load(&path), Err(Error::NoCategories)));
    }

    #[test]
    fn test_load_reports_unreadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(matches!(load(&path), Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_credentials_required() {
        let ep = SshEndpoint {
            user: String::new(),
            host: "example.com".into(),
            port: None,
            key: None,
        };
        assert!(matches!(
            ep.ensure_credentials(),
            Err(Error::MissingCredentials)
        ));

        let ep = SshEndpoint {
            user: "alice".into(),
            host: "example.com".into(),
            port: None,
            key: None,
        };
        assert!(ep.ensure_credentials().is_ok());
    }

    #[test]
    fn test_non_default_port() {
        let mut ep = SshEndpoint::default();
        assert_eq!(ep.non_default_port(), None);
        ep.port = Some(0);
        assert_eq!(ep.non_default_port(), None);
        ep.port = Some(22);
        assert_eq!(ep.non_default_port(), None);
        ep.port = Some(2222);
        assert_eq!(ep.non_default_port(), Some(2222));
    }
}
