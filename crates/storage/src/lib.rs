//! Storage abstraction and implementations for Overload.
//!
//! This crate provides the storage collaborator trait: every collection is
//! loaded and saved as a whole. Two backends are included, one JSON document
//! per collection on disk and an in-memory store for tests.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory_storage;

pub use trait_::{Storage, StorageError, Result};
pub use json_storage::JsonStorage;
pub use memory_storage::{Collection, MemoryStorage};
