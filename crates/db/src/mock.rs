//! `MockGreetingStore` — an in-memory test double for [`GreetingStore`].
//!
//! Useful in unit tests where a real Postgres connection is either
//! unavailable or irrelevant.  Mirrors the sequence behaviour of the real
//! table: ids start at 1, increase monotonically, and are never reused
//! after a delete.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{Greeting, NewGreeting};
use crate::repository::GreetingStore;
use crate::DbError;

struct MockState {
    rows: BTreeMap<i64, String>,
    next_id: i64,
}

/// An in-memory greeting table guarded by a mutex.
pub struct MockGreetingStore {
    state: Mutex<MockState>,
}

impl MockGreetingStore {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockGreetingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GreetingStore for MockGreetingStore {
    async fn list_all(&self) -> Result<Vec<Greeting>, DbError> {
        let state = self.state.lock().unwrap();
        let rows = state
            .rows
            .iter()
            .map(|(id, name)| Greeting {
                id: *id,
                name: name.clone(),
            })
            .collect();

        Ok(rows)
    }

    async fn save(&self, greeting: NewGreeting) -> Result<Greeting, DbError> {
        let name = greeting.required_name()?.to_string();
        let mut state = self.state.lock().unwrap();

        let id = match greeting.id {
            Some(id) => {
                // Keep the counter ahead of explicitly supplied ids so later
                // inserts still get a previously unseen value.
                if id >= state.next_id {
                    state.next_id = id + 1;
                }
                id
            }
            None => {
                let id = state.next_id;
                state.next_id += 1;
                id
            }
        };

        state.rows.insert(id, name.clone());

        Ok(Greeting { id, name })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.remove(&id).is_some())
    }
}
