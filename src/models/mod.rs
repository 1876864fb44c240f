//! Data models for the book catalog

pub mod book;

pub use book::{Book, BookDraft};
