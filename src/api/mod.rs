//! API handlers for MyBooks REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
