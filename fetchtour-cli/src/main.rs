//! fetchtour CLI - the four HTTP verbs against a posts collection
//!
//! - `tui` (default): the page with one panel per verb
//! - `list` / `create` / `update` / `delete`: the same calls, scriptable
//! - `config`: manage ~/.fetchtour/config.toml

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use fetchtour_core::config::ENV_BASE_URL;
use fetchtour_core::TourConfig;
use tracing_subscriber::EnvFilter;

mod commands;
mod confirm;

use commands::config::ConfigArgs;
use commands::posts::{CreateArgs, DeleteArgs, ListArgs, UpdateArgs};

#[derive(Parser, Debug)]
#[command(
    name = "fetchtour",
    author,
    version,
    about = "A tour of GET, POST, PUT and DELETE against a JSON posts API",
    long_about = "Four small widgets, one per HTTP verb, talking to a JSONPlaceholder-style \
                  posts service. Run without a subcommand for the terminal page."
)]
struct Cli {
    /// Base URL of the posts service
    #[arg(long, env = ENV_BASE_URL, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the terminal page with all four widgets (default)
    Tui,
    /// GET the collection and print the first posts
    List(ListArgs),
    /// POST a new post
    Create(CreateArgs),
    /// PUT a full replacement of a post
    Update(UpdateArgs),
    /// DELETE a post after confirmation
    Delete(DeleteArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

fn init_tracing(default_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let config = match &command {
        // init and path must keep working when the file does not parse
        Commands::Config(args) if !args.command.reads_config() => TourConfig::default(),
        _ => TourConfig::load()
            .context("Failed to load configuration")?
            .with_overrides(cli.base_url.clone(), cli.timeout)
            .context("Invalid command-line override")?,
    };

    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter().to_string()
    };

    match command {
        Commands::Tui => {
            let log_path = fetchtour_tui::logging::log_path();
            fetchtour_tui::logging::init_file_logging(&log_path, &filter)?;
            fetchtour_tui::run(&config).await
        }
        Commands::List(args) => {
            init_tracing(&filter)?;
            commands::posts::run_list(&config, args).await
        }
        Commands::Create(args) => {
            init_tracing(&filter)?;
            commands::posts::run_create(&config, args).await
        }
        Commands::Update(args) => {
            init_tracing(&filter)?;
            commands::posts::run_update(&config, args).await
        }
        Commands::Delete(args) => {
            init_tracing(&filter)?;
            commands::posts::run_delete(&config, args).await
        }
        Commands::Config(args) => {
            init_tracing(&filter)?;
            commands::config::run_config(&config, args)
        }
    }
}
