//! This module contains the data models for the library events producer.

pub mod library_event;

pub use library_event::{Book, LibraryEvent, LibraryEventType};
