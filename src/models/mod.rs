//! Data models for BookApp

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookShort};
pub use user::{User, UserShort};
