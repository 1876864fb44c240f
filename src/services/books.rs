//! Book catalog service.
//!
//! Thin orchestration layer between the HTTP handlers and the store; its
//! only logic is pairing a path id with a request payload on update and
//! turning store misses into [`AppError::NotFound`].

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the full catalog
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    /// Get a single book by id
    pub fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))
    }

    /// Create a new book. The id is always store-assigned; drafts carry none.
    pub fn create_book(&self, draft: BookDraft) -> Book {
        self.repository.books.insert(draft)
    }

    /// Replace the book at `id` with the draft's fields.
    ///
    /// Strict update: fails with not-found when `id` is absent, for HTTP and
    /// programmatic callers alike. Nothing is ever inserted on this path.
    pub fn update_book(&self, id: i64, draft: BookDraft) -> AppResult<Book> {
        self.repository
            .books
            .replace(draft.into_book(id))
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))
    }

    /// Delete the book at `id`, reporting not-found when it is absent
    pub fn delete_book(&self, id: i64) -> AppResult<()> {
        if self.repository.books.remove(id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("No book with id {}", id)))
        }
    }
}
