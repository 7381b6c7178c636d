mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use todo_lib::{App, AppConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage your todos and account from the command line")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides TODO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// State file holding the session token and theme (overrides TODO_STATE_FILE)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, register, verify, or log out
    Auth(commands::auth::AuthArgs),
    /// Show or change your account
    User(commands::user::UserArgs),
    /// List and edit todos
    Todos(commands::todos::TodosArgs),
    /// Show or change the UI theme
    Theme(commands::theme::ThemeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("todo_api=info".parse()?)
                .add_directive("todo_lib=info".parse()?)
                .add_directive("todo_cli=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let mut config = AppConfig::from_env();
    if let Some(ref api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(ref state_file) = cli.state_file {
        config = config.with_state_file(state_file.clone());
    }
    let app = App::open(&config)?;

    match &cli.command {
        Commands::Auth(args) => commands::auth::run(args, &app, &format).await?,
        Commands::User(args) => commands::user::run(args, &app, &format).await?,
        Commands::Todos(args) => commands::todos::run(args, &app, &format).await?,
        Commands::Theme(args) => commands::theme::run(args, &app, &format)?,
    }

    Ok(())
}
