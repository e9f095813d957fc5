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
pub struct PreviewCommand {
    /// Directory to scan (defaults to [source] dir in iconsmith.toml)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Path of the icon relative to the source directory, e.g. nav/arrow-left.svg
    pub path: String,

    #[command(flatten)]
    pub naming: NamingArgs,
}

impl PreviewCommand {
    pub fn run(&self, config: &IconsmithToml) -> Result<()> {
        let source = source_dir(self.source.as_deref(), config)?;
        let naming = self.naming.resolve(config);

        let report = ops::preview(&source, &self.path, naming)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
