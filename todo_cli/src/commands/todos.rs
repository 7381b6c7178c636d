use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use todo_lib::types::Todo;
use todo_lib::{validation, App};

use crate::commands::auth::require_login;
use crate::output::{print_message, print_todo, print_todos, OutputFormat};

#[derive(Args)]
pub struct TodosArgs {
    #[command(subcommand)]
    pub command: TodosCommand,
}

#[derive(Subcommand)]
pub enum TodosCommand {
    /// List your todos
    List {
        /// Only show todos that are not done
        #[arg(long)]
        open: bool,
    },
    /// Create a todo
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Deadline as YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(long)]
        deadline: String,
    },
    /// Change a todo's title, description, or deadline
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Mark a todo as done
    Done { id: String },
    /// Mark a todo as not done
    Undone { id: String },
    /// Delete a todo
    Delete { id: String },
}

pub async fn run(args: &TodosArgs, app: &App, format: &OutputFormat) -> Result<()> {
    require_login(app)?;
    match &args.command {
        TodosCommand::List { open } => {
            let mut todos = app.client.get_todos().await?;
            if *open {
                todos.retain(|t| !t.completed);
            }
            todos.sort_by(|a, b| a.deadline.cmp(&b.deadline));
            eprintln!("{} todos", todos.len());
            print_todos(&todos, format)?;
        }
        TodosCommand::Add {
            title,
            description,
            deadline,
        } => {
            let title = validation::validate_title(title)?;
            let deadline = validation::validate_deadline(deadline)?;
            let todo = app
                .client
                .create_todo(&title, description.trim(), &deadline)
                .await?;
            print_todo(&todo, format)?;
        }
        TodosCommand::Edit {
            id,
            title,
            description,
            deadline,
        } => {
            let mut todo = find_todo(app, id).await?;
            if let Some(title) = title {
                todo.title = validation::validate_title(title)?;
            }
            if let Some(description) = description {
                todo.description = description.trim().to_string();
            }
            if let Some(deadline) = deadline {
                let rfc3339 = validation::validate_deadline(deadline)?;
                todo.deadline = rfc3339
                    .parse()
                    .with_context(|| format!("invalid deadline '{}'", deadline))?;
            }
            let resp = app.client.update_todo(&todo).await?;
            print_message(&resp.message, "Todo updated");
        }
        TodosCommand::Done { id } => set_completed(app, id, true).await?,
        TodosCommand::Undone { id } => set_completed(app, id, false).await?,
        TodosCommand::Delete { id } => {
            let resp = app.client.delete_todo(id).await?;
            print_message(&resp.message, "Todo deleted");
        }
    }
    Ok(())
}

/// The API has no single-todo route, so look it up in the full list.
async fn find_todo(app: &App, id: &str) -> Result<Todo> {
    app.client
        .get_todos()
        .await?
        .into_iter()
        .find(|t| t.id == id)
        .with_context(|| format!("no todo with id '{}'", id))
}

async fn set_completed(app: &App, id: &str, completed: bool) -> Result<()> {
    let mut todo = find_todo(app, id).await?;
    todo.completed = completed;
    let resp = app.client.update_todo(&todo).await?;
    print_message(&resp.message, "Todo updated");
    Ok(())
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
