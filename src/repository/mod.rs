//! Repository layer for data access

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Book;

pub use memory::MemoryStore;

/// Direct data-access contract for books.
///
/// Follows a unit-of-work shape: [`add`](BookRepository::add) stages a book,
/// [`save_changes`](BookRepository::save_changes) commits everything staged,
/// and [`get_book_by_id`](BookRepository::get_book_by_id) reads committed
/// state only. Normal request flows go through the service facade; only the
/// CreateUserBook path drives this interface directly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Stage a book for insertion.
    async fn add(&self, book: Book);

    /// Commit staged books. Returns `false` when nothing was staged.
    async fn save_changes(&self) -> bool;

    /// Fetch a committed book by its identifier.
    async fn get_book_by_id(&self, book_id: Uuid) -> Option<Book>;
}
