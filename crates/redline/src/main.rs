//! Redline CLI - CriticMarkup annotation engine.
//!
//! Provides commands for:
//! - `render`: Render annotated Markdown to HTML
//! - `annotations`: List and navigate annotations in a document
//! - `css`: Emit the annotation stylesheet

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AnnotationsArgs, CssArgs, RenderArgs};
use output::Output;

/// Redline - CriticMarkup annotation engine.
#[derive(Parser)]
#[command(name = "redline", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render annotated Markdown to HTML.
    Render(RenderArgs),
    /// List and navigate annotations in a document.
    Annotations(AnnotationsArgs),
    /// Emit the annotation stylesheet.
    Css(CssArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Annotations(args) => args.execute(),
        Commands::Css(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
