//! In-memory book store.
//!
//! The authoritative collection and the id counter live behind a single
//! mutex; every read and write goes through it. Clones of the repository
//! share the same underlying store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::book::{Book, BookDraft};

struct Shelf {
    books: Vec<Book>,
    counter: i64,
}

/// Book store. Holds the only code that mutates the collection.
#[derive(Clone)]
pub struct BooksRepository {
    shelf: Arc<Mutex<Shelf>>,
}

impl BooksRepository {
    /// Create a store seeded with the initial catalog (ids 1-3)
    pub fn new() -> Self {
        let seed = vec![
            Book {
                id: 1,
                title: "The Hitchhiker's Guide to the Galaxy".to_string(),
                author: "Douglas Adams".to_string(),
                publication_year: 1979,
            },
            Book {
                id: 2,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                publication_year: 1949,
            },
            Book {
                id: 3,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
                publication_year: 1960,
            },
        ];
        let counter = seed.len() as i64;

        Self {
            shelf: Arc::new(Mutex::new(Shelf {
                books: seed,
                counter,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shelf> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the data is still a valid shelf, so keep serving it.
        self.shelf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the full collection in current internal order
    pub fn list(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// Linear scan lookup. A miss is a normal outcome, not an error.
    pub fn find_by_id(&self, id: i64) -> Option<Book> {
        self.lock().books.iter().find(|b| b.id == id).cloned()
    }

    /// Append a new book under a freshly assigned id.
    ///
    /// The counter only ever increments, so ids strictly increase across
    /// interleaved deletes and are never reused.
    pub fn insert(&self, draft: BookDraft) -> Book {
        let mut shelf = self.lock();
        shelf.counter += 1;
        let book = draft.into_book(shelf.counter);
        shelf.books.push(book.clone());
        book
    }

    /// Replace the stored book carrying `book.id`, wholesale.
    ///
    /// Strict update: returns `None` and leaves the store untouched when no
    /// entry has that id. The replacement is appended rather than written in
    /// place, so a replaced book moves to the end of the internal order.
    pub fn replace(&self, book: Book) -> Option<Book> {
        let mut shelf = self.lock();
        if !shelf.books.iter().any(|b| b.id == book.id) {
            return None;
        }
        shelf.books.retain(|b| b.id != book.id);
        shelf.books.push(book.clone());
        Some(book)
    }

    /// Remove every entry with the given id (at most one, since ids are
    /// unique). Returns whether anything was removed.
    pub fn remove(&self, id: i64) -> bool {
        let mut shelf = self.lock();
        let before = shelf.books.len();
        shelf.books.retain(|b| b.id != id);
        shelf.books.len() != before
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, author: &str, year: i32) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            publication_year: year,
        }
    }

    #[test]
    fn seeds_three_books_in_order() {
        let repo = BooksRepository::new();
        let books = repo.list();
        assert_eq!(books.len(), 3);
        assert_eq!(
            books.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(books[0].title, "The Hitchhiker's Guide to the Galaxy");
        assert_eq!(books[1].author, "George Orwell");
        assert_eq!(books[2].publication_year, 1960);
    }

    #[test]
    fn find_by_id_hit_and_miss() {
        let repo = BooksRepository::new();
        let book = repo.find_by_id(1).unwrap();
        assert_eq!(book.author, "Douglas Adams");
        assert!(repo.find_by_id(999).is_none());
    }

    #[test]
    fn insert_continues_counter_past_seed() {
        let repo = BooksRepository::new();
        let created = repo.insert(draft("Dune", "Herbert", 1965));
        assert_eq!(created.id, 4);
        assert_eq!(repo.list().len(), 4);
        assert_eq!(repo.find_by_id(4).unwrap().title, "Dune");
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let repo = BooksRepository::new();
        let a = repo.insert(draft("A", "a", 2000));
        assert!(repo.remove(a.id));
        let b = repo.insert(draft("B", "b", 2001));
        assert!(b.id > a.id);
    }

    #[test]
    fn replace_is_strict_and_moves_entry_to_end() {
        let repo = BooksRepository::new();

        let unknown = Book {
            id: 999,
            title: "Ghost".to_string(),
            author: "Nobody".to_string(),
            publication_year: 0,
        };
        assert!(repo.replace(unknown).is_none());
        assert_eq!(repo.list().len(), 3);

        let replacement = Book {
            id: 1,
            title: "New Title".to_string(),
            author: "X".to_string(),
            publication_year: 2000,
        };
        let replaced = repo.replace(replacement.clone()).unwrap();
        assert_eq!(replaced, replacement);
        assert_eq!(repo.find_by_id(1).unwrap().title, "New Title");

        let books = repo.list();
        assert_eq!(books.len(), 3);
        assert_eq!(books.last().unwrap().id, 1);
    }

    #[test]
    fn remove_reports_whether_anything_matched() {
        let repo = BooksRepository::new();
        assert!(repo.remove(2));
        assert!(repo.find_by_id(2).is_none());
        assert_eq!(repo.list().len(), 2);
        // Second removal of the same id is a no-op
        assert!(!repo.remove(2));
        assert_eq!(repo.list().len(), 2);
    }

    #[test]
    fn clones_share_the_same_store() {
        let repo = BooksRepository::new();
        let other = repo.clone();
        repo.insert(draft("Dune", "Herbert", 1965));
        assert_eq!(other.list().len(), 4);
    }
}
