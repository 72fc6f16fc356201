//! In-memory book store shared by every request handler.

use bookshelf_kernel::settings::IdStrategy;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{sample_books, Book, BookInput};

/// Ordered, process-lifetime collection of books.
///
/// A single `RwLock` guards the collection: `list` and `find_by_id` share it,
/// every mutation takes it exclusively. Id allocation happens under the same
/// write guard as the insert, so concurrent creates never hand out one id
/// twice.
pub struct BookStore {
    shelf: RwLock<Shelf>,
    strategy: IdStrategy,
}

struct Shelf {
    books: Vec<Book>,
    /// Next candidate for `IdStrategy::Sequential`; `None` once `u64::MAX`
    /// has been handed out or stored.
    next_sequence: Option<u64>,
}

impl Shelf {
    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn push(&mut self, book: Book) {
        if let Ok(numeric) = book.id.parse::<u64>() {
            if self.next_sequence.is_some_and(|next| numeric >= next) {
                // `None` marks the counter as exhausted.
                self.next_sequence = numeric.checked_add(1);
            }
        }
        self.books.push(book);
    }

    fn allocate_id(&mut self, strategy: IdStrategy) -> String {
        loop {
            let candidate = match strategy {
                IdStrategy::Sequential => match self.next_sequence {
                    Some(id) => {
                        self.next_sequence = id.checked_add(1);
                        id.to_string()
                    }
                    None => {
                        tracing::warn!("sequential ids exhausted; assigning a uuid");
                        Uuid::new_v4().to_string()
                    }
                },
                IdStrategy::Uuid => Uuid::new_v4().to_string(),
            };

            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

impl BookStore {
    /// Create a store holding `books` in the given order.
    pub fn new(books: Vec<Book>, strategy: IdStrategy) -> Self {
        let mut shelf = Shelf {
            books: Vec::with_capacity(books.len()),
            next_sequence: Some(1),
        };
        for book in books {
            shelf.push(book);
        }

        Self {
            shelf: RwLock::new(shelf),
            strategy,
        }
    }

    /// Store pre-filled with the three sample records.
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::new(sample_books(), strategy)
    }

    pub fn empty(strategy: IdStrategy) -> Self {
        Self::new(Vec::new(), strategy)
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// All books in current order.
    pub async fn list(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    pub async fn len(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// First book whose id equals `id`.
    pub async fn find_by_id(&self, id: &str) -> Option<Book> {
        let shelf = self.shelf.read().await;
        shelf.position(id).map(|index| shelf.books[index].clone())
    }

    /// Add `book` to the end as-is. Callers own id uniqueness; use `create`
    /// to have the store assign one.
    pub async fn append(&self, book: Book) {
        tracing::debug!(book_id = %book.id, "appending book");
        self.shelf.write().await.push(book);
    }

    /// Assign a fresh unique id to `input` and append it.
    pub async fn create(&self, input: BookInput) -> Book {
        let mut shelf = self.shelf.write().await;
        let id = shelf.allocate_id(self.strategy);
        let book = input.into_book(id);
        shelf.push(book.clone());

        tracing::debug!(book_id = %book.id, total = shelf.books.len(), "book created");
        book
    }

    /// Replace every field of the book stored under `id`, keeping the id and
    /// its position. Returns `None` when no such book exists.
    pub async fn replace(&self, id: &str, input: BookInput) -> Option<Book> {
        let mut shelf = self.shelf.write().await;
        let index = shelf.position(id)?;
        let book = input.into_book(id);
        shelf.books[index] = book.clone();

        tracing::debug!(book_id = %id, position = index, "book replaced");
        Some(book)
    }

    /// Remove the first book stored under `id`; reports whether one was removed.
    pub async fn remove_by_id(&self, id: &str) -> bool {
        self.delete(id).await.0
    }

    /// Remove the first book stored under `id` and return the remaining
    /// collection as observed under the same lock.
    pub async fn delete(&self, id: &str) -> (bool, Vec<Book>) {
        let mut shelf = self.shelf.write().await;
        let removed = match shelf.position(id) {
            Some(index) => {
                shelf.books.remove(index);
                true
            }
            None => false,
        };

        tracing::debug!(book_id = %id, removed, total = shelf.books.len(), "book delete");
        (removed, shelf.books.clone())
    }
}
