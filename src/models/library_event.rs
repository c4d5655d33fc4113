//! Domain model for library catalog change events.
//!
//! Field declaration order is load-bearing: downstream consumers compare the
//! serialized value byte-for-byte, so `libraryEventId` must precede
//! `libraryEventType`, which must precede `book`.

use serde::{Deserialize, Serialize};

/// The kind of catalog mutation an event describes.
///
/// Assigned by the HTTP gateway based on which operation was invoked, never
/// trusted from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LibraryEventType {
    /// A book record that does not yet exist in the catalog.
    New,
    /// An update to an existing book record.
    Update,
}

/// A single library catalog change event, the unit of work flowing from the
/// HTTP gateway to the Kafka topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEvent {
    /// Identifier of the event. Present for updates; unset for creations,
    /// where the downstream system has not yet assigned one.
    #[serde(default)]
    pub library_event_id: Option<i32>,

    /// The mutation kind. Optional on input; the gateway overwrites it
    /// before the event is published.
    #[serde(default)]
    pub library_event_type: Option<LibraryEventType>,

    /// The book record the event is about.
    pub book: Book,
}

/// The book record carried inside a [`LibraryEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier of the book.
    pub book_id: i32,
    /// Title of the book.
    pub book_name: String,
    /// Author of the book.
    pub book_author: String,
}
