use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::navigation::View;
use crate::referrals::DEFAULT_REFERRAL_CODE;

/// Template written by `studio config init`.
pub const CONFIG_TEMPLATE: &str = r#"[studio]
name = "PhotoCRM"
photographer = "Alex Rivera"
referral_code = "PHOTO2024"

[paths]
# Alternate fixture file; ${HOME} and other environment variables expand.
# fixtures = "${HOME}/studio/fixtures.json"

[ui]
default_view = "dashboard"
date_format = "%a, %b %-d, %Y"
"#;

/// Settings for the studio dashboard, read from `~/.studio/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub studio: StudioProfile,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioProfile {
    pub name: String,
    pub photographer: String,
    pub referral_code: String,
}

impl Default for StudioProfile {
    fn default() -> Self {
        Self {
            name: "PhotoCRM".to_string(),
            photographer: "Alex Rivera".to_string(),
            referral_code: DEFAULT_REFERRAL_CODE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub default_view: View,
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: View::Dashboard,
            date_format: "%a, %b %-d, %Y".to_string(),
        }
    }
}

impl StudioConfig {
    /// Default location: `~/.studio/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".studio/config.toml")
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file at the default location yields defaults; a missing file
    /// that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(StudioError::config(format!(
                    "config not found at {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml_str(&content, &path)
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|err| StudioError::toml(origin, err))?;
        config.expand_variables();
        config.validate()?;
        Ok(config)
    }

    /// Expand ${VAR} references in paths from the environment
    fn expand_variables(&mut self) {
        let vars: HashMap<String, String> = env::vars().collect();
        if let Some(ref fixtures) = self.paths.fixtures {
            let expanded = expand_string(&fixtures.display().to_string(), &vars);
            self.paths.fixtures = Some(PathBuf::from(expanded));
        }
    }

    fn validate(&self) -> Result<()> {
        if self.studio.referral_code.trim().is_empty() {
            return Err(StudioError::config("studio.referral_code must not be empty"));
        }
        if self.ui.date_format.trim().is_empty() {
            return Err(StudioError::config("ui.date_format must not be empty"));
        }
        Ok(())
    }

    /// Write the template to `path`, refusing to clobber unless `force`.
    pub fn write_template(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(StudioError::config(format!(
                "config already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}

/// Expand ${var} references in a string
fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
    let mut result = s.to_string();
    for (key, value) in vars {
        let pattern = format!("${{{}}}", key);
        result = result.replace(&pattern, value);
    }
    result
}
