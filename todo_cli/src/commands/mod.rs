//! CLI subcommand implementations.

pub mod auth;
pub mod theme;
pub mod todos;
pub mod user;
