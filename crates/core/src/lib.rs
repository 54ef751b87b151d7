//! Domain types and response shapes for the Taskify kanban backend.
//!
//! This crate has no I/O. It holds the resource models, their runtime
//! [`schema`] tables, and the request DTOs that the HTTP client sends.

pub mod error;
pub mod models;
pub mod schema;
pub mod types;
