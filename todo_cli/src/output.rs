use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use todo_lib::types::{Todo, User};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct TodoRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Done")]
    #[serde(rename = "Done")]
    done: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Deadline")]
    #[serde(rename = "Deadline")]
    deadline: String,
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_todo_rows(todos: &[Todo]) -> Vec<TodoRow> {
    todos
        .iter()
        .map(|t| TodoRow {
            id: t.id.clone(),
            done: if t.completed { "x" } else { "" }.to_string(),
            title: t.title.clone(),
            description: t.description.clone(),
            deadline: t.deadline.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect()
}

fn build_user_rows(user: &User) -> Vec<UserRow> {
    let mut rows = vec![
        UserRow {
            field: "ID",
            value: user.id.clone(),
        },
        UserRow {
            field: "Username",
            value: user.username.clone(),
        },
        UserRow {
            field: "Email",
            value: user.email.clone(),
        },
        UserRow {
            field: "Verified",
            value: if user.is_verified { "yes" } else { "no" }.to_string(),
        },
    ];
    if !user.pending_email.is_empty() {
        rows.push(UserRow {
            field: "Pending email",
            value: user.pending_email.clone(),
        });
    }
    if !user.oauth_provider.is_empty() {
        rows.push(UserRow {
            field: "Sign-in",
            value: user.oauth_provider.clone(),
        });
    }
    rows
}

// -- Todos --

pub fn print_todos(todos: &[Todo], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_todo_rows(todos))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_todo_rows(todos));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_todo_rows(todos) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&todos),
    }
    Ok(())
}

pub fn print_todo(todo: &Todo, format: &OutputFormat) -> Result<()> {
    print_todos(std::slice::from_ref(todo), format)
}

// -- User --

pub fn print_user(user: &User, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_user_rows(user))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_user_rows(user));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            write_user_csv(&mut wtr, user)?;
        }
        OutputFormat::Json => print_json(user),
    }
    Ok(())
}

fn write_user_csv<W: std::io::Write>(wtr: &mut csv::Writer<W>, user: &User) -> Result<()> {
    for row in build_user_rows(user) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Misc --

/// Prints a server acknowledgement, falling back to `fallback` when the
/// server sent none.
pub fn print_message(message: &str, fallback: &str) {
    if message.trim().is_empty() {
        println!("{}", fallback);
    } else {
        println!("{}", message.trim());
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
