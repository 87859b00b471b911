mod args;
mod commands;

use crate::args::{Cli, Commands};
use aasm_logger::{LevelFilter, Logger};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).stderr(true).init()?;

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Render { out, content } => {
            commands::render(&out, content.as_deref())?;
        },
        Commands::Sections { content } => commands::sections(content.as_deref(), &mut stdout)?,
        Commands::Directory { content } => commands::directory(content.as_deref(), &mut stdout)?,
    }

    Ok(())
}
