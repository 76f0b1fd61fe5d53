//! studio CLI - photography studio dashboard
//!
//! Browse clients, galleries, bookings, packages and referrals from a fixture
//! file, search across them, or open the interactive dashboard (`studio tui`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;
mod tui;

use commands::search::SearchArgs;
use commands::views::{BookingsArgs, ClientsArgs, GalleriesArgs, JsonArgs};
use commands::Session;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "studio",
    author,
    version,
    about = "Dashboard for a photography studio: clients, galleries, bookings and referrals",
    long_about = "Browse and search a photography studio's clients, galleries and bookings. \
                  Run `studio tui` for the interactive dashboard with Ctrl+K search."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.studio/config.toml)
    #[arg(long, global = true, env = "STUDIO_CONFIG")]
    config: Option<PathBuf>,

    /// Fixture JSON to load instead of the built-in sample studio
    #[arg(long, global = true, env = "STUDIO_FIXTURES")]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search clients, galleries and bookings (max 8 results)
    Search(SearchArgs),
    /// List clients, optionally filtered by name or email
    Clients(ClientsArgs),
    /// List galleries by delivery status
    Galleries(GalleriesArgs),
    /// List bookings by status, earliest first
    Bookings(BookingsArgs),
    /// Show pricing packages
    Packages(JsonArgs),
    /// Show the referral program and top referrers
    Referrals(JsonArgs),
    /// Show stat cards, upcoming bookings and recent galleries
    Dashboard(JsonArgs),
    /// Open the interactive dashboard
    Tui,
    /// Manage studio configuration (path, show, init)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = matches!(cli.command, Commands::Tui).then(TracingConfig::tui_log_path);
    let tracing_config = TracingConfig {
        debug: cli.debug,
        log_file,
    };
    // The TUI owns the terminal; stay silent there unless asked
    if !matches!(cli.command, Commands::Tui) || cli.debug {
        tracing_setup::init(&tracing_config).ok();
    }
    debug!(command = ?cli.command, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let session = || Session::load(cli.config.as_deref(), cli.fixtures.as_deref());

    match cli.command {
        Commands::Search(args) => commands::run_search(&session()?, &args, &mut out)?,
        Commands::Clients(args) => commands::run_clients(&session()?, &args, &mut out)?,
        Commands::Galleries(args) => commands::run_galleries(&session()?, &args, &mut out)?,
        Commands::Bookings(args) => commands::run_bookings(&session()?, &args, &mut out)?,
        Commands::Packages(args) => commands::run_packages(&session()?, &args, &mut out)?,
        Commands::Referrals(args) => commands::run_referrals(&session()?, &args, &mut out)?,
        Commands::Dashboard(args) => commands::run_dashboard(&session()?, &args, &mut out)?,
        Commands::Tui => {
            let Session { config, data } = session()?;
            drop(out);
            return tui::run(data, config);
        }
        Commands::Config(args) => config::run_config(&args, cli.config.as_deref(), &mut out)?,
        Commands::Completions(args) => run_completions(&args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn run_completions(args: &CompletionsArgs, out: &mut impl Write) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, out);

    Ok(())
}
