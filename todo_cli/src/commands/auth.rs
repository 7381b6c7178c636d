use anyhow::Result;
use clap::{Args, Subcommand};
use todo_lib::{validation, App, TokenStore};

use crate::output::{print_json, print_message, OutputFormat};

#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Log in with a username or email address
    Login {
        /// Username or email address
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with a Google ID token
    Google {
        token: String,
    },
    /// Create an account; a verification code is emailed to you
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Verify your email address with the emailed code
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show whether a session token is stored
    Status,
}

pub async fn run(args: &AuthArgs, app: &App, format: &OutputFormat) -> Result<()> {
    match &args.command {
        AuthCommand::Login { username, password } => {
            let resp = app.client.login(username.trim(), password).await?;
            report_login(&resp.message, resp.user.as_ref().map(|u| u.username.as_str()));
        }
        AuthCommand::Google { token } => {
            let resp = app.client.google_login(token.trim()).await?;
            report_login(&resp.message, resp.user.as_ref().map(|u| u.username.as_str()));
        }
        AuthCommand::Register {
            username,
            email,
            password,
        } => {
            let username = validation::validate_username(username)?;
            let email = validation::validate_email(email)?;
            validation::validate_password(password)?;
            let resp = app.client.register(&username, &email, password).await?;
            print_message(
                &resp.message,
                "Registered. Check your email for the verification code",
            );
        }
        AuthCommand::Verify { email, code } => {
            let email = validation::validate_email(email)?;
            let code = validation::validate_code(code)?;
            let resp = app.client.verify_email(&email, &code).await?;
            report_login(&resp.message, resp.user.as_ref().map(|u| u.username.as_str()));
        }
        AuthCommand::Logout => {
            app.client.logout()?;
            println!("Logged out");
        }
        AuthCommand::Status => {
            let snapshot = app.auth.snapshot();
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "is_authenticated": snapshot.is_authenticated,
                })),
                _ if snapshot.is_authenticated => println!("Logged in"),
                _ => println!("Not logged in"),
            }
        }
    }
    Ok(())
}

fn report_login(message: &str, username: Option<&str>) {
    match username.filter(|name| !name.is_empty()) {
        Some(name) => print_message(message, &format!("Logged in as {}", name)),
        None => print_message(message, "Logged in"),
    }
}

/// Fails early when no session token is stored.
pub fn require_login(app: &App) -> Result<()> {
    if app.auth.token().is_none() {
        anyhow::bail!("Not logged in. Run `todo auth login` first");
    }
    Ok(())
}
