//! `redline css` command implementation.

use std::path::PathBuf;

use clap::Args;

use redline_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the css command.
#[derive(Args)]
pub(crate) struct CssArgs {
    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover redline.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSS class prefix for annotation rules (overrides config).
    #[arg(long)]
    class_prefix: Option<String>,
}

impl CssArgs {
    /// Execute the css command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let mut config = match self.config.as_deref() {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(std::path::Path::new("."))?,
        };
        config.apply_cli(&CliSettings {
            class_prefix: self.class_prefix,
            gfm: None,
        });

        let theme = config.theme()?;
        let css = theme.stylesheet(&config.render.class_prefix);
        super::write_output(self.output.as_deref(), &css)?;
        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}
