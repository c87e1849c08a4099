//! Repository layer — the persistence gateway contract and its
//! Postgres-backed implementation.
//!
//! Every operation takes the pool handle held by the repository and returns
//! a `Result<T, DbError>`.  No business logic, no domain types — pure SQL.

pub mod greetings;

use async_trait::async_trait;

use crate::models::{Greeting, NewGreeting};
use crate::DbError;

pub use greetings::GreetingRepository;

/// Storage contract for the greetings table.
///
/// Handlers depend on this trait so tests can substitute the in-memory
/// double in [`crate::mock`].
#[async_trait]
pub trait GreetingStore: Send + Sync {
    /// Return every row currently in the table, in unspecified order.
    async fn list_all(&self) -> Result<Vec<Greeting>, DbError>;

    /// Insert a new row (datastore assigns the id) or, when `id` is present,
    /// insert-or-replace the row with that id.  Returns the resulting row.
    ///
    /// Fails with [`DbError::ConstraintViolation`] when `name` is absent or
    /// empty, without touching the table.
    async fn save(&self, greeting: NewGreeting) -> Result<Greeting, DbError>;

    /// Remove the row with the given id.  Returns whether a row existed;
    /// deleting a nonexistent id is a successful no-op.
    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError>;
}
