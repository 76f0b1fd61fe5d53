//! Command implementations for the studio CLI

use std::path::Path;

use anyhow::{Context, Result};
use studio_core::{StudioConfig, StudioData};
use tracing::debug;

pub mod search;
pub mod views;

// Re-export dispatcher functions for flat access from main.rs
pub use search::run_search;
pub use views::{
    run_bookings, run_clients, run_dashboard, run_galleries, run_packages, run_referrals,
};

/// Config plus fixture data, loaded once per invocation
#[derive(Debug)]
pub struct Session {
    pub config: StudioConfig,
    pub data: StudioData,
}

impl Session {
    /// `--fixtures` wins over `paths.fixtures` from the config file.
    pub fn load(config_path: Option<&Path>, fixtures: Option<&Path>) -> Result<Self> {
        let config = StudioConfig::load(config_path).context("Failed to load config")?;

        let fixtures = fixtures
            .map(Path::to_path_buf)
            .or_else(|| config.paths.fixtures.clone());
        debug!(fixtures = ?fixtures, "loading studio data");

        let data = StudioData::load(fixtures.as_deref()).with_context(|| match &fixtures {
            Some(path) => format!("Failed to load fixtures from {}", path.display()),
            None => "Failed to load built-in fixtures".to_string(),
        })?;

        Ok(Self { config, data })
    }

    #[cfg(test)]
    pub fn builtin() -> Self {
        Self {
            config: StudioConfig::default(),
            data: StudioData::builtin().unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fixtures_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let fixtures = dir.path().join("empty.json");
        fs::write(&fixtures, "{}").unwrap();

        let config = dir.path().join("config.toml");
        fs::write(
            &config,
            "[paths]\nfixtures = \"/definitely/not/here.json\"\n",
        )
        .unwrap();

        let session = Session::load(Some(&config), Some(&fixtures)).unwrap();
        assert!(session.data.clients.is_empty());

        assert!(Session::load(Some(&config), None).is_err());
    }
}
