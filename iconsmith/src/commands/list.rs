use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use iconsmith_config::IconsmithToml;

use super::{NamingArgs, source_dir};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Directory to scan (defaults to [source] dir in iconsmith.toml)
    pub source: Option<PathBuf>,

    /// Only show files whose relative path contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub naming: NamingArgs,
}

impl ListCommand {
    pub fn run(&self, config: &IconsmithToml) -> Result<()> {
        let source = source_dir(self.source.as_deref(), config)?;
        let naming = self.naming.resolve(config);

        let report = ops::list(&source, naming, self.filter.as_deref().unwrap_or(""))?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
