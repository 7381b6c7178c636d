//! Application layer for the todo client: persisted auth and theme state,
//! input validation, and configuration around the `todo_api` client.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod theme;
pub mod validation;

pub use todo_api;
pub use todo_api::types;
pub use todo_api::{normalize, Client, ResponseBody, TokenStore};

pub use app::App;
pub use auth::{AuthSnapshot, AuthState};
pub use config::AppConfig;
pub use error::TodoAppError;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use theme::{Theme, ThemeState};
