//! BookApp Server
//!
//! A Rust implementation of the BookApp book-collection server, providing a
//! REST JSON API for managing books and the users who own them. Controllers
//! validate request shape, delegate to the service facade, and map missing
//! results to structured JSON failures.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
