use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use user_browser_cli::commands::{config_cmd, config_cmd::ConfigCommands, users_cmd};
use user_browser_cli::config::{get_config_path, AppConfig};
use user_browser_cli::errors::Error;
use user_browser_core::FetchState;

/// Exit code when a fetch settled in an error state
const EXIT_FETCH_FAILED: i32 = 1;

/// Exit code for configuration and argument problems
const EXIT_CLI_ERROR: i32 = 2;

/// User browser: list GitHub users and view their profiles
#[derive(Parser)]
#[command(name = "user-browser")]
#[command(about = "List GitHub users and view their profiles", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List GitHub users
    List,

    /// Show the profile of a single user
    Show {
        /// Login of the user to show
        login: String,
    },

    /// Pick users from the list and view their profiles
    Browse,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("USER_BROWSER_LOG"))
        .init();

    let cli = Cli::parse();
    let code = match run(&cli).await {
        Ok(Some(FetchState::Error(_))) => EXIT_FETCH_FAILED,
        Ok(_) => 0,
        Err(e) => {
            error!("Error: {e}");
            eprintln!("Error: {e}");
            EXIT_CLI_ERROR
        }
    };
    std::process::exit(code);
}

/// Runs the selected command. Returns the final fetch state for commands that
/// fetch users.
async fn run(cli: &Cli) -> Result<Option<FetchState>, Error> {
    let config_path = get_config_path(cli.config.as_deref());
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::List => {
            let config = AppConfig::load_or_default(&config_path)?;
            let stream = users_cmd::build_stream(&config)?;
            Ok(Some(users_cmd::list_users(&stream, &mut stdout).await?))
        }
        Commands::Show { login } => {
            let config = AppConfig::load_or_default(&config_path)?;
            let stream = users_cmd::build_stream(&config)?;
            Ok(Some(users_cmd::show_user(&stream, login, &mut stdout).await?))
        }
        Commands::Browse => {
            let config = AppConfig::load_or_default(&config_path)?;
            let stream = users_cmd::build_stream(&config)?;
            let mut stdin = io::stdin().lock();
            Ok(Some(
                users_cmd::browse(&stream, &mut stdin, &mut stdout).await?,
            ))
        }
        Commands::Config(cmd) => {
            config_cmd::execute(cmd, &config_path, &mut stdout)?;
            Ok(None)
        }
        Commands::Version => {
            writeln!(
                stdout,
                "user-browser version {}",
                option_env!("USER_BROWSER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            )?;
            Ok(None)
        }
    }
}
