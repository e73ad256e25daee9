//! Configuration management for the search command builder
//!
//! Names the delegate programs and lets the environment override them.

use crate::error::{Result, SearchError};
use tracing::debug;

/// Environment variable overriding the filesystem walker
pub const WALKER_ENV: &str = "FSEARCH_FIND";
/// Environment variable overriding the default line matcher
pub const MATCHER_ENV: &str = "FSEARCH_GREP";
/// Environment variable overriding the capture viewer
pub const VIEWER_ENV: &str = "FSEARCH_VIEWER";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program that walks the directory tree
    pub walker: String,
    /// Default line-matching program, unless `--grep` overrides it
    pub matcher: String,
    /// Interactive program used to view captured output
    pub viewer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walker: "find".to_string(),
            matcher: "grep".to_string(),
            viewer: "vim".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let overrides = [
            (WALKER_ENV, &mut config.walker),
            (MATCHER_ENV, &mut config.matcher),
            (VIEWER_ENV, &mut config.viewer),
        ];

        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                debug!("{} overrides {:?} with {:?}", key, slot, value);
                *slot = value;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("walker", &self.walker),
            ("matcher", &self.matcher),
            ("viewer", &self.viewer),
        ] {
            if value.trim().is_empty() {
                return Err(SearchError::config(format!("{name} program is empty")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.walker, "find");
        assert_eq!(config.matcher, "grep");
        assert_eq!(config.viewer, "vim");
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = [(MATCHER_ENV, "egrep"), (VIEWER_ENV, "less")].into();
        let config = Config::from_lookup(|key| env.get(key).map(ToString::to_string)).unwrap();

        assert_eq!(config.walker, "find");
        assert_eq!(config.matcher, "egrep");
        assert_eq!(config.viewer, "less");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = Config::from_lookup(|key| (key == WALKER_ENV).then(|| "  ".to_string())).unwrap();
        assert_eq!(config.walker, "find");
    }

    #[test]
    fn test_validate_rejects_empty_program() {
        let config = Config {
            viewer: String::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SearchError::Config { .. })));
    }
}
