//! In-memory storage backing the reference services and repository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Book, User};

use super::BookRepository;

/// Shared in-memory store.
///
/// Clones share the same underlying maps, so the services and the book
/// repository observe a single state. Holds no per-request state; every
/// request operates on the shared maps through the async locks.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    books: RwLock<HashMap<Uuid, Book>>,
    users: RwLock<HashMap<Uuid, User>>,
    staged_books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_book(&self, book_id: Uuid) -> Option<Book> {
        self.inner.books.read().await.get(&book_id).cloned()
    }

    pub async fn books_by_user(&self, user_id: Uuid) -> Vec<Book> {
        self.inner
            .books
            .read()
            .await
            .values()
            .filter(|book| book.user_id == Some(user_id))
            .cloned()
            .collect()
    }

    /// Insert a book. Returns `None` when the id is already taken.
    pub async fn insert_book(&self, book: Book) -> Option<Book> {
        let mut books = self.inner.books.write().await;
        if books.contains_key(&book.id) {
            return None;
        }
        books.insert(book.id, book.clone());
        Some(book)
    }

    /// Replace an existing book. Returns `None` when the id is unknown.
    pub async fn replace_book(&self, book: Book) -> Option<Book> {
        let mut books = self.inner.books.write().await;
        if !books.contains_key(&book.id) {
            return None;
        }
        books.insert(book.id, book.clone());
        Some(book)
    }

    pub async fn remove_book(&self, book_id: Uuid) -> bool {
        self.inner.books.write().await.remove(&book_id).is_some()
    }

    pub async fn get_user(&self, user_id: Uuid) -> Option<User> {
        self.inner.users.read().await.get(&user_id).cloned()
    }

    pub async fn insert_user(&self, user: User) -> Option<User> {
        let mut users = self.inner.users.write().await;
        if users.contains_key(&user.id) {
            return None;
        }
        users.insert(user.id, user.clone());
        Some(user)
    }

    pub async fn replace_user(&self, user: User) -> Option<User> {
        let mut users = self.inner.users.write().await;
        if !users.contains_key(&user.id) {
            return None;
        }
        users.insert(user.id, user.clone());
        Some(user)
    }

    pub async fn remove_user(&self, user_id: Uuid) -> bool {
        self.inner.users.write().await.remove(&user_id).is_some()
    }
}

/// [`BookRepository`] backed by the shared [`MemoryStore`].
#[derive(Clone)]
pub struct BooksRepository {
    store: MemoryStore,
}

impl BooksRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for BooksRepository {
    async fn add(&self, book: Book) {
        self.store.inner.staged_books.write().await.push(book);
    }

    async fn save_changes(&self) -> bool {
        let staged: Vec<Book> = self.store.inner.staged_books.write().await.drain(..).collect();
        if staged.is_empty() {
            return false;
        }
        let mut books = self.store.inner.books.write().await;
        for book in staged {
            books.insert(book.id, book);
        }
        true
    }

    async fn get_book_by_id(&self, book_id: Uuid) -> Option<Book> {
        self.store.get_book(book_id).await
    }
}
