//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour beyond
//! the name-based equality the resource has always had.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::DbError;

// ---------------------------------------------------------------------------
// greetings
// ---------------------------------------------------------------------------

/// A persisted greeting row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Greeting {
    pub id: i64,
    pub name: String,
}

/// Two greetings compare equal when their names match; row identity lives in
/// the database, not in memory.  Storage enforces no uniqueness on `name`.
impl PartialEq for Greeting {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Greeting {}

impl std::hash::Hash for Greeting {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Input to [`crate::GreetingStore::save`].
///
/// A present `id` requests insert-or-replace keyed on that id.  `name` stays
/// optional so a null/absent value reaches the store and fails there as a
/// constraint violation rather than as a decode rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGreeting {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl NewGreeting {
    /// The validated name, or a constraint violation when absent or empty.
    pub fn required_name(&self) -> Result<&str, DbError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(DbError::ConstraintViolation(
                "name must be a non-empty string".into(),
            )),
        }
    }
}
