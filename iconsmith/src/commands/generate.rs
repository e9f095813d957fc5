use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use iconsmith_config::{Config, IconsmithToml};

use super::{NamingArgs, source_dir};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory to scan (defaults to [source] dir in iconsmith.toml)
    pub source: Option<PathBuf>,

    /// Output directory (defaults to [output] dir in iconsmith.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only generate files whose relative path contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    /// Generate only this relative path (repeatable)
    #[arg(long = "only", value_name = "PATH")]
    pub only: Vec<String>,

    /// Mirror the source directory layout under the output directory
    #[arg(long)]
    pub preserve_structure: bool,

    /// Write every component directly into the output directory
    #[arg(long, conflicts_with = "preserve_structure")]
    pub flat: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub naming: NamingArgs,
}

impl GenerateCommand {
    pub fn run(&self, config: &IconsmithToml) -> Result<()> {
        let source = source_dir(self.source.as_deref(), config)?;
        let output = self
            .output
            .clone()
            .or_else(|| config.output_dir())
            .ok_or_else(|| {
                eyre!("no output directory given; pass --output or set [output] dir in iconsmith.toml")
            })?;
        let naming = self.naming.resolve(config);

        let report = ops::generate(
            &source,
            naming,
            ops::generate::GenerateOptions {
                output_dir: &output,
                filter: self.filter.as_deref().unwrap_or(""),
                only: &self.only,
                preserve_structure: self.preserve_structure(config.config()),
                dry_run: self.dry_run,
            },
            |progress| {
                eprintln!(
                    "[{}/{}] {} {}",
                    progress.processed,
                    progress.total,
                    if progress.succeeded { "ok" } else { "failed" },
                    progress.entry.relative_path()
                );
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// `--preserve-structure` and `--flat` both override
    /// `[output] preserve_structure`.
    fn preserve_structure(&self, config: &Config) -> bool {
        if self.flat {
            false
        } else if self.preserve_structure {
            true
        } else {
            config.output.preserve_structure
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        generate: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        TestCli::try_parse_from(std::iter::once("generate").chain(args.iter().copied()))
            .unwrap()
            .generate
    }

    fn preserving() -> Config {
        "[output]\npreserve_structure = true\n".parse().unwrap()
    }

    #[test]
    fn test_flat_overrides_config() {
        assert!(!parse(&["--flat"]).preserve_structure(&preserving()));
    }

    #[test]
    fn test_config_applies_without_flags() {
        assert!(parse(&[]).preserve_structure(&preserving()));
        assert!(!parse(&[]).preserve_structure(&Config::default()));
    }

    #[test]
    fn test_preserve_structure_overrides_config() {
        assert!(parse(&["--preserve-structure"]).preserve_structure(&Config::default()));
    }

    #[test]
    fn test_flat_conflicts_with_preserve_structure() {
        let result = TestCli::try_parse_from(["generate", "--flat", "--preserve-structure"]);
        assert!(result.is_err());
    }
}
