//! Service facade layer

pub mod books;
pub mod users;

use std::sync::Arc;

use crate::repository::{memory::BooksRepository, BookRepository, MemoryStore};

pub use books::BookService;
pub use users::UserService;

/// Container for the service facades and the book repository.
///
/// Controllers go through the service traits; the repository handle exists
/// only for the CreateUserBook path, which writes through the repository
/// directly instead of the facade.
#[derive(Clone)]
pub struct Services {
    pub books: Arc<dyn BookService>,
    pub users: Arc<dyn UserService>,
    pub book_repository: Arc<dyn BookRepository>,
}

impl Services {
    /// Create the reference services over a shared in-memory store.
    pub fn new(store: MemoryStore) -> Self {
        Self {
            books: Arc::new(books::BooksService::new(store.clone())),
            users: Arc::new(users::UsersService::new(store.clone())),
            book_repository: Arc::new(BooksRepository::new(store)),
        }
    }
}
