pub mod breakdown;
pub mod export;
pub mod init;
pub mod tag;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Break a workload into tasks with AI help")]
    Breakdown(breakdown::BreakdownArgs),
    #[command(about = "Inspect tags")]
    Tag(tag::TagArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args).await,
            Commands::Breakdown(args) => breakdown::cmd(args).await,
            Commands::Tag(args) => tag::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
