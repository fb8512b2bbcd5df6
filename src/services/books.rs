//! Book service

use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::Book, repository::MemoryStore};

/// Business-logic facade for books.
///
/// Lookups and mutations return `None` when the underlying operation did not
/// succeed; delete returns `false`. Mapping those outcomes to HTTP failures
/// is the controllers' job, never the service's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookService: Send + Sync {
    async fn get_book_by_id(&self, book_id: Uuid) -> Option<Book>;

    /// All books owned by the given user.
    async fn get_books_by_user_id(&self, user_id: Uuid) -> Option<Vec<Book>>;

    /// Persist a new book. `None` when a book with the same id already exists.
    async fn add_book(&self, book: Book) -> Option<Book>;

    /// Replace an existing book. `None` when the id is unknown.
    async fn update_book(&self, book: Book) -> Option<Book>;

    async fn delete_book(&self, book: Book) -> bool;
}

/// Reference [`BookService`] over the in-memory store.
#[derive(Clone)]
pub struct BooksService {
    store: MemoryStore,
}

impl BooksService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookService for BooksService {
    async fn get_book_by_id(&self, book_id: Uuid) -> Option<Book> {
        self.store.get_book(book_id).await
    }

    async fn get_books_by_user_id(&self, user_id: Uuid) -> Option<Vec<Book>> {
        Some(self.store.books_by_user(user_id).await)
    }

    async fn add_book(&self, book: Book) -> Option<Book> {
        self.store.insert_book(book).await
    }

    async fn update_book(&self, book: Book) -> Option<Book> {
        self.store.replace_book(book).await
    }

    async fn delete_book(&self, book: Book) -> bool {
        self.store.remove_book(book.id).await
    }
}
