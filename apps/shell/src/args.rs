use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "aasm")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "AASM 2026 site tools")]
pub(crate) struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Write every section as a static HTML page
    Render {
        /// Output directory (created when missing)
        #[arg(short, long)]
        out: PathBuf,
        /// Content document; the bundled one when omitted
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
    /// List navigation entries as `id<TAB>label`
    Sections {
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
    /// Print the sorted committees and working-group bylines
    Directory {
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}
