//! `studio config` - inspect and create `~/.studio/config.toml`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use studio_core::StudioConfig;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a starter config file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

/// `--config` if given, otherwise the default location
fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(StudioConfig::config_path)
}

pub fn run_config(args: &ConfigArgs, explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match &args.command {
        ConfigCommands::Path => run_path(explicit, out),
        ConfigCommands::Show => run_show(explicit, out),
        ConfigCommands::Init(init) => run_init(init, explicit, out),
    }
}

fn run_path(explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", resolve_path(explicit).display())?;
    Ok(())
}

fn run_show(explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let config = StudioConfig::load(explicit).context("Failed to load config")?;
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    write!(out, "{rendered}")?;
    Ok(())
}

fn run_init(args: &InitArgs, explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let path = resolve_path(explicit);
    StudioConfig::write_template(&path, args.force)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    info!(path = %path.display(), "wrote config template");
    writeln!(out, "Created {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(command: ConfigCommands, path: &Path) -> Result<String> {
        let mut out = Vec::new();
        run_config(&ConfigArgs { command }, Some(path), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_init_then_show() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let created = run(ConfigCommands::Init(InitArgs { force: false }), &path).unwrap();
        assert!(created.starts_with("Created"));
        assert!(run(ConfigCommands::Init(InitArgs { force: false }), &path).is_err());

        let shown = run(ConfigCommands::Show, &path).unwrap();
        assert!(shown.contains("referral_code = \"PHOTO2024\""));
        assert!(shown.contains("default_view = \"dashboard\""));
    }

    #[test]
    fn test_path_echoes_override() {
        let path = Path::new("/tmp/elsewhere/config.toml");
        assert_eq!(run(ConfigCommands::Path, path).unwrap().trim(), path.display().to_string());
    }
}
