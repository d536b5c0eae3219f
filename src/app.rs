// Declare modules
pub mod cli;
pub mod colors;
pub mod config;
pub mod formatter;
pub mod models;
pub mod renderer;
pub mod scanner;
pub mod sorter;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::AnsiWriter;
use self::renderer::TreeRenderer;
use self::scanner::DiskFileSystem;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;
    log::debug!("Resolved configuration: {:?}", config);

    let Some(root) = config.options.root.clone() else {
        return Ok(());
    };
    if !root.is_dir() {
        log::warn!("{} is not a directory", root.display());
    }

    // 3. Walk and print
    let fs = DiskFileSystem::new(root, &config)?;
    let renderer = TreeRenderer::new(&fs, &config.options, &config.palette);

    let stdout = io::stdout();
    let mut out = AnsiWriter::new(BufWriter::new(stdout.lock()));
    renderer
        .render(&mut out)
        .context("Failed to write tree to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
