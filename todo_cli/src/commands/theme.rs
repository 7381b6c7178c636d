use anyhow::Result;
use clap::{Args, Subcommand};
use todo_lib::{App, Theme};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        /// light or dark
        theme: String,
    },
}

pub fn run(args: &ThemeArgs, app: &App, format: &OutputFormat) -> Result<()> {
    let theme = match &args.command {
        ThemeCommand::Show => app.theme.current(),
        ThemeCommand::Toggle => app.theme.toggle()?,
        ThemeCommand::Set { theme } => {
            let theme: Theme = theme.parse()?;
            app.theme.set(theme)?;
            theme
        }
    };
    match format {
        OutputFormat::Json => {
            let (attribute, value) = theme.attribute();
            print_json(&serde_json::json!({
                "theme": theme.as_str(),
                "attribute": attribute,
                "value": value,
            }));
        }
        _ => println!("{}", theme),
    }
    Ok(())
}
