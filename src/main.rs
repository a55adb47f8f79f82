use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "doctree")]
#[command(
    version,
    about = "File tree and docsify sidebar generator for documentation archives"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root of the documentation repository
    #[arg(long, short, default_value = ".")]
    root: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the README tree, rewrite the sidebar, and print statistics
    Generate,

    /// Print the rendered file tree
    Tree,

    /// Print the rendered sidebar
    Sidebar,

    /// Show corpus statistics
    Stats {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve once so the path-containment filter sees stable full paths.
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => doctree::cli::commands::generate::run(&root)?,
        Commands::Tree => doctree::cli::commands::tree::run(&root)?,
        Commands::Sidebar => doctree::cli::commands::sidebar::run(&root)?,
        Commands::Stats { format } => doctree::cli::commands::stats::run(&root, &format)?,
    }

    Ok(())
}
