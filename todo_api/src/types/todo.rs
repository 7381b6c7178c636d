use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TodoID = String;

/// A todo item as stored by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoID,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

/// Body of `POST /api/todos`. The deadline is sent exactly as given.
#[derive(Clone, Debug, Serialize)]
pub struct CreateTodoRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub deadline: &'a str,
}
