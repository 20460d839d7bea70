use std::path::PathBuf;
use std::{env, fs, io};

use anyhow::{bail, Context, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::authz::config::AuthzConfig;

pub struct PathSet {
    pub config_path: PathBuf,
}

impl PathSet {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        // Check if running as root (UID == 0)
        let is_root = unsafe { libc::geteuid() == 0 };

        let config_path = if let Some(path) = config_path {
            path
        } else if let Ok(path) = env::var("GATEKEEPER_CONFIG") {
            PathBuf::from(path)
        } else if is_root {
            PathBuf::from("/etc/gatekeeper")
        } else {
            Self::home_dir()?.join(".config").join("gatekeeper")
        };

        Ok(Self { config_path })
    }

    /// Loads `{name}.toml` from the config directory. A missing file is not
    /// an error, the defaults are used instead.
    pub fn load_config<T, F>(&self, name: &str, default_func: F) -> Result<T>
    where
        T: CommonConfig + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.config_path.join(format!("{name}.toml"));
        let mut cfg: T = match fs::read_to_string(&path) {
            Ok(s) => toml::from_str(&s)
                .with_context(|| format!("parse config toml: {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("Config file for {name} not found, using defaults");
                default_func()
            }
            Err(err) => {
                return Err(err).context(format!("read config file: {}", path.display()));
            }
        };

        cfg.complete(self).context("validate config")?;
        Ok(cfg)
    }

    fn home_dir() -> Result<PathBuf> {
        let dir = std::env::var_os("HOME") // Unix/Linux/macOS
            .or_else(|| std::env::var_os("USERPROFILE")) // Windows
            .map(PathBuf::from);
        match dir {
            Some(dir) => Ok(dir),
            None => {
                bail!("could not determine home directory, please specify config path manually")
            }
        }
    }
}

pub trait CommonConfig {
    fn default() -> Self;
    fn complete(&mut self, ps: &PathSet) -> Result<()>;
}

/// See: [`shellexpand::full`].
pub fn expandenv(name: &str, s: impl AsRef<str>) -> Result<String> {
    let s =
        shellexpand::full(s.as_ref()).with_context(|| format!("expand env value for '{name}'"))?;
    Ok(s.to_string())
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GatekeeperConfig {
    /// One of error, info, debug.
    #[serde(default = "GatekeeperConfig::default_log_level")]
    pub log_level: String,

    /// Log every authorization decision made through the guard.
    #[serde(default = "GatekeeperConfig::default_audit")]
    pub audit: bool,

    #[serde(default = "AuthzConfig::default")]
    pub authz: AuthzConfig,
}

impl CommonConfig for GatekeeperConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            audit: Self::default_audit(),
            authz: AuthzConfig::default(),
        }
    }

    fn complete(&mut self, ps: &PathSet) -> Result<()> {
        self.log_level = expandenv("log_level", &self.log_level)?;
        if !Self::LOG_LEVELS.contains(&self.log_level.as_str()) {
            bail!(
                "log_level must be one of {:?}, found '{}'",
                Self::LOG_LEVELS,
                self.log_level
            );
        }

        self.authz.complete(ps).context("authz")?;

        Ok(())
    }
}

impl GatekeeperConfig {
    const LOG_LEVELS: [&'static str; 3] = ["error", "info", "debug"];

    pub fn default_log_level() -> String {
        String::from("info")
    }

    pub fn default_audit() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::authz::config::CatalogPolicy;

    use super::*;

    fn test_path_set(name: &str) -> PathSet {
        let dir = env::temp_dir().join(format!("gatekeeper-test-{name}"));
        fs::create_dir_all(&dir).unwrap();
        PathSet::new(Some(dir)).unwrap()
    }

    #[test]
    fn test_load_missing() {
        let ps = test_path_set("missing");
        let _ = fs::remove_file(ps.config_path.join("gatekeeper.toml"));

        let cfg: GatekeeperConfig = ps
            .load_config("gatekeeper", GatekeeperConfig::default)
            .unwrap();
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.audit);
        assert_eq!(cfg.authz.catalog_policy, CatalogPolicy::Permission);
    }

    #[test]
    fn test_load_file() {
        let ps = test_path_set("file");
        fs::write(
            ps.config_path.join("gatekeeper.toml"),
            r#"
            log_level = "debug"
            audit = false

            [authz]
            catalog_policy = "authenticated"
            "#,
        )
        .unwrap();

        let cfg: GatekeeperConfig = ps
            .load_config("gatekeeper", GatekeeperConfig::default)
            .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert!(!cfg.audit);
        assert_eq!(cfg.authz.catalog_policy, CatalogPolicy::Authenticated);
        assert!(cfg.authz.catalog_public_read);
    }

    #[test]
    fn test_invalid_log_level() {
        let ps = test_path_set("invalid");
        fs::write(ps.config_path.join("gatekeeper.toml"), r#"log_level = "trace""#).unwrap();

        let result: Result<GatekeeperConfig> =
            ps.load_config("gatekeeper", GatekeeperConfig::default);
        assert!(result.is_err());
    }
}
