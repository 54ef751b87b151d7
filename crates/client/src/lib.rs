//! Typed HTTP client for the Taskify kanban backend.
//!
//! Every call goes through [`ApiClient::fetch`], which classifies the HTTP
//! status, parses the body, and validates it against the expected
//! response's schema before handing back a typed value. Resource
//! operations live under [`api`] and are reached from the client:
//!
//! ```no_run
//! # async fn demo() -> taskify_client::ApiResult<()> {
//! use taskify_client::{ApiClient, ClientConfig};
//! use taskify_core::models::ListCardsParams;
//!
//! let client = ApiClient::new(ClientConfig::new("https://sp-taskify-api.vercel.app/4-1"))?;
//! let page = client.cards().list(&ListCardsParams::for_column(5)).await?;
//! println!("{} cards", page.cards.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pagination;

pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use fetch::ApiClient;
