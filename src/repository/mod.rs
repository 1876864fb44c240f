//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding the in-memory stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository seeded with the initial catalog
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
