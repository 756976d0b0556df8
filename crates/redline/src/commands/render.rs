//! `redline render` command implementation.

use std::path::PathBuf;

use clap::Args;

use redline_config::{CliSettings, Config};
use redline_renderer::Renderer;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover redline.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSS class prefix for annotation wrappers (overrides config).
    #[arg(long)]
    class_prefix: Option<String>,

    /// Enable GitHub Flavored Markdown extensions (default: enabled).
    #[arg(long)]
    gfm: Option<bool>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long, conflicts_with = "gfm")]
    no_gfm: bool,

    /// Emit a full HTML document with the annotation stylesheet inlined.
    #[arg(long)]
    standalone: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let gfm = self.resolve_gfm();
        let cli_settings = CliSettings {
            class_prefix: self.class_prefix,
            gfm,
        };
        let mut config = load_config(self.config.as_deref(), &self.file)?;
        config.apply_cli(&cli_settings);

        let source = std::fs::read_to_string(&self.file)?;
        let renderer = Renderer::new()
            .with_class_prefix(&config.render.class_prefix)
            .with_gfm(config.render.gfm);
        let body = renderer.render(&source);

        let html = if self.standalone {
            let theme = config.theme()?;
            standalone_document(&body, &theme.stylesheet(&config.render.class_prefix))
        } else {
            body
        };

        super::write_output(self.output.as_deref(), &html)?;
        if let Some(path) = &self.output {
            output.success(&format!("Rendered {}", path.display()));
        }
        Ok(())
    }

    /// Resolve the GFM toggle from --gfm/--no-gfm flags.
    fn resolve_gfm(&self) -> Option<bool> {
        self.no_gfm.then_some(false).or(self.gfm)
    }
}

/// Load config from an explicit path, or discover it next to the input file.
pub(crate) fn load_config(
    explicit: Option<&std::path::Path>,
    input: &std::path::Path,
) -> Result<Config, CliError> {
    let config = match explicit {
        Some(path) => Config::load(path)?,
        None => {
            let start = input.parent().filter(|p| !p.as_os_str().is_empty());
            Config::load_or_default(start.unwrap_or_else(|| std::path::Path::new(".")))?
        }
    };
    Ok(config)
}

/// Wrap a rendered body in a minimal standalone HTML document.
fn standalone_document(body: &str, stylesheet: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{stylesheet}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}
