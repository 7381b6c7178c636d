use anyhow::Result;
use clap::{Args, Subcommand};
use todo_lib::{validation, App};

use crate::commands::auth::require_login;
use crate::output::{print_message, print_user, OutputFormat};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Show your profile
    Show,
    /// Change your username
    Rename { username: String },
    /// Change your password
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },
    /// Request an email change; a code is sent to the new address
    EmailRequest { email: String },
    /// Confirm an email change with the emailed code
    EmailVerify { code: String },
    /// Request account deletion; a confirmation code is emailed to you
    DeleteRequest {
        #[arg(long)]
        password: String,
    },
    /// Confirm account deletion with the emailed code
    DeleteConfirm { code: String },
}

pub async fn run(args: &UserArgs, app: &App, format: &OutputFormat) -> Result<()> {
    require_login(app)?;
    match &args.command {
        UserCommand::Show => {
            let user = app.client.get_user().await?;
            print_user(&user, format)?;
        }
        UserCommand::Rename { username } => {
            let username = validation::validate_username(username)?;
            let resp = app.client.update_username(&username).await?;
            print_message(&resp.message, &format!("Username changed to {}", username));
        }
        UserCommand::Password { old, new } => {
            validation::validate_password(new)?;
            let resp = app.client.update_password(old, new).await?;
            print_message(&resp.message, "Password updated");
        }
        UserCommand::EmailRequest { email } => {
            let email = validation::validate_email(email)?;
            let resp = app.client.request_email_update(&email).await?;
            print_message(
                &resp.message,
                &format!("Verification code sent to {}", email),
            );
        }
        UserCommand::EmailVerify { code } => {
            let code = validation::validate_code(code)?;
            let resp = app.client.verify_email_update(&code).await?;
            print_message(&resp.message, "Email address updated");
        }
        UserCommand::DeleteRequest { password } => {
            let resp = app.client.request_delete_user(password).await?;
            print_message(&resp.message, "Confirmation code sent to your email");
        }
        UserCommand::DeleteConfirm { code } => {
            let code = validation::validate_code(code)?;
            let resp = app.client.confirm_delete_user(&code).await?;
            // The account is gone, so the token is useless now.
            app.client.logout()?;
            print_message(&resp.message, "Account deleted");
        }
    }
    Ok(())
}
