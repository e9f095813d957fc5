mod completions;
mod generate;
mod list;
mod preview;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, eyre};
use generate::GenerateCommand;
use iconsmith_config::{CONFIG_FILE_NAME, IconsmithToml, validate_affix};
use iconsmith_core::{Framework, NamingConfig};
use list::ListCommand;
use preview::PreviewCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for iconsmith_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(version)]
#[command(about = "Generate Vue and React components from SVG icons")]
pub(crate) struct Cli {
    /// Path to iconsmith.toml (optional; defaults apply when missing)
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_logging(self.verbose);

        if let Commands::Completions(cmd) = &self.command {
            return cmd.run();
        }

        let config = IconsmithToml::open_or_default(&self.config).unwrap_or_exit();
        if config.exists() {
            log::debug!("loaded {}", config.path().display());
        }

        match &self.command {
            Commands::List(cmd) => cmd.run(&config),
            Commands::Preview(cmd) => cmd.run(&config),
            Commands::Generate(cmd) => cmd.run(&config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List SVG files and the component names derived for them
    List(ListCommand),

    /// Print one rendered component without writing it
    Preview(PreviewCommand),

    /// Generate components and an index.js for the selected icons
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Naming flags shared by every command that derives component names.
#[derive(Args)]
pub(crate) struct NamingArgs {
    /// Prefix for component names (overrides iconsmith.toml)
    #[arg(long, value_parser = parse_prefix)]
    pub prefix: Option<String>,

    /// Suffix for component names (overrides iconsmith.toml)
    #[arg(long, value_parser = parse_suffix)]
    pub suffix: Option<String>,

    /// Target framework (overrides iconsmith.toml)
    #[arg(short, long)]
    pub framework: Option<Framework>,
}

impl NamingArgs {
    /// Flags first, then iconsmith.toml, then built-in defaults.
    pub fn resolve(&self, config: &IconsmithToml) -> NamingConfig {
        let mut naming = config.config().naming_config();
        if let Some(prefix) = &self.prefix {
            naming.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            naming.suffix = suffix.clone();
        }
        if let Some(framework) = self.framework {
            naming.framework = framework;
        }
        naming
    }
}

/// Pick the source directory from the argument or iconsmith.toml.
pub(crate) fn source_dir(arg: Option<&Path>, config: &IconsmithToml) -> Result<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| config.source_dir())
        .ok_or_else(|| {
            eyre!("no source directory given; pass SOURCE or set [source] dir in iconsmith.toml")
        })
}

fn parse_prefix(s: &str) -> std::result::Result<String, String> {
    parse_affix(s, true)
}

fn parse_suffix(s: &str) -> std::result::Result<String, String> {
    parse_affix(s, false)
}

fn parse_affix(s: &str, leading: bool) -> std::result::Result<String, String> {
    match validate_affix(s, leading) {
        Some(reason) => Err(reason.to_string()),
        None => Ok(s.to_string()),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
