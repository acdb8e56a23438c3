//! In-memory Book storage.
//!
//! domain (Book / BookStorage) <- infra (InMemory / Shared) <- application (BookService)

pub mod application;
pub mod domain;
pub mod infra;
