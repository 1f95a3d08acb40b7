use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

pub type BookId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}

/// Books the server starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "The Awakening", "Kate Chopin"),
        Book::new(2, "City of Glass", "Paul Auster"),
    ]
}

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: BookId,
}

/// Shared in-memory book list.
///
/// Cloning yields another handle to the same books. Ids come from a counter
/// that only ever grows, so for add-only workloads a new id is always the
/// current count plus one.
#[derive(Debug, Clone)]
pub struct BookStore {
    shelf: Arc<RwLock<Shelf>>,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::with_books(Vec::new())
    }
}

impl BookStore {
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0).saturating_add(1);
        Self {
            shelf: Arc::new(RwLock::new(Shelf { books, next_id })),
        }
    }

    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    // A panic while holding the lock cannot leave a half-written book behind,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.shelf.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.shelf.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn list(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    pub fn find_by_id(&self, id: BookId) -> Option<Book> {
        self.read().books.iter().find(|b| b.id == id).cloned()
    }

    pub fn add(&self, title: Option<String>, author: Option<String>) -> Book {
        let mut shelf = self.write();
        let book = Book {
            id: shelf.next_id,
            title,
            author,
        };
        shelf.next_id = shelf.next_id.saturating_add(1);
        shelf.books.push(book.clone());
        info!(id = book.id, "book added");
        book
    }

    pub fn update(
        &self,
        id: BookId,
        title: Option<String>,
        author: Option<String>,
    ) -> StoreResult<Book> {
        let mut shelf = self.write();
        let Some(book) = shelf.books.iter_mut().find(|b| b.id == id) else {
            debug!(id, "update target missing");
            return Err(StoreError::NotFound(id.to_string()));
        };
        book.title = title;
        book.author = author;
        info!(id, "book updated");
        Ok(book.clone())
    }
}
