//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, the greeting row struct, and the
//! [`GreetingStore`] gateway that performs the three SQL operations the
//! service needs (find-all, save, delete-by-id).  No business logic lives
//! here.

pub mod error;
pub mod mock;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::DbError;
pub use models::{Greeting, NewGreeting};
pub use pool::DbPool;
pub use repository::GreetingStore;

#[cfg(test)]
mod store_tests;
