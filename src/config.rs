//! Settings and platform-specific paths

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalog::IdStrategy;

/// Overrides the data directory
pub const HOME_ENV: &str = "TOOLSHELF_HOME";

/// Shared admin password; admin login is impossible while unset
pub const ADMIN_PASSWORD_ENV: &str = "TOOLSHELF_ADMIN_PASSWORD";

/// `sequential` (default) or `uuid`
pub const ID_STRATEGY_ENV: &str = "TOOLSHELF_ID_STRATEGY";

const STORAGE_FILE: &str = "storage.db";

/// Get the data directory
/// - `$TOOLSHELF_HOME` if set
/// - macOS: ~/Library/Application Support/toolshelf/
/// - Linux: ~/.local/share/toolshelf/
/// - Windows: %APPDATA%/toolshelf/
pub fn data_dir() -> Result<PathBuf> {
    data_dir_from(|key| std::env::var(key).ok())
}

fn data_dir_from(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
    if let Some(home) = lookup(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("toolshelf"))
}

/// Runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub storage_path: PathBuf,
    pub admin_password: Option<String>,
    pub id_strategy: IdStrategy,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_path = data_dir_from(&lookup)?.join(STORAGE_FILE);

        let admin_password = lookup(ADMIN_PASSWORD_ENV).filter(|v| !v.is_empty());

        let id_strategy = match lookup(ID_STRATEGY_ENV) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid {}", ID_STRATEGY_ENV))?,
            None => IdStrategy::default(),
        };

        Ok(Self {
            storage_path,
            admin_password,
            id_strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_data_dir() {
        let resolved = data_dir_from(|_: &str| None);
        match dirs::data_dir() {
            Some(base) => assert_eq!(resolved.unwrap(), base.join("toolshelf")),
            None => assert!(resolved.is_err()),
        }
    }

    #[test]
    fn test_empty_home_falls_back() {
        let resolved = data_dir_from(lookup(&[(HOME_ENV, "")])).ok();
        assert_eq!(resolved, data_dir_from(|_: &str| None).ok());
    }

    #[test]
    fn test_home_override() {
        let settings = Settings::from_lookup(lookup(&[(HOME_ENV, "/tmp/shelf")])).unwrap();
        assert_eq!(settings.storage_path, PathBuf::from("/tmp/shelf/storage.db"));
        assert!(settings.admin_password.is_none());
        assert_eq!(settings.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_password_and_strategy() {
        let settings = Settings::from_lookup(lookup(&[
            (HOME_ENV, "/tmp/shelf"),
            (ADMIN_PASSWORD_ENV, "s3cret"),
            (ID_STRATEGY_ENV, "uuid"),
        ]))
        .unwrap();
        assert_eq!(settings.admin_password.as_deref(), Some("s3cret"));
        assert_eq!(settings.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_empty_password_is_unset() {
        let settings =
            Settings::from_lookup(lookup(&[(HOME_ENV, "/tmp/shelf"), (ADMIN_PASSWORD_ENV, "")]))
                .unwrap();
        assert!(settings.admin_password.is_none());
    }

    #[test]
    fn test_bad_strategy() {
        let result =
            Settings::from_lookup(lookup(&[(HOME_ENV, "/tmp/shelf"), (ID_STRATEGY_ENV, "random")]));
        assert!(result.is_err());
    }
}
