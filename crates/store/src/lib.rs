//! `paintstock-store` — persistence for the inventory Document.
//!
//! One serialized Document lives behind a [`StorageBackend`]; the [`Store`]
//! front door runs every mutation as an atomic load/validate/mutate/persist
//! sequence and enforces all constraints via the domain layer.

pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use store::Store;
