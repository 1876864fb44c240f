//! Book model and request payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry. Immutable value; updates replace the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier, unique for the lifetime of the process
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

/// Client payload for create and update requests.
///
/// Carries no id on purpose: create always assigns a fresh one and update
/// always takes the id from the request path. An `id` field in the JSON body
/// is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl BookDraft {
    /// Materialize the draft into a full record under the given id
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
        }
    }
}
