//! Greeting CRUD operations against Postgres.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Greeting, NewGreeting};
use crate::repository::GreetingStore;
use crate::DbError;

/// Postgres-backed [`GreetingStore`].
///
/// Holds the shared pool handle it was constructed with; there is no
/// ambient/static connection state anywhere in the crate.
pub struct GreetingRepository {
    pool: PgPool,
}

impl GreetingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GreetingStore for GreetingRepository {
    async fn list_all(&self) -> Result<Vec<Greeting>, DbError> {
        let rows = sqlx::query_as::<_, Greeting>("SELECT id, name FROM greetings")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn save(&self, greeting: NewGreeting) -> Result<Greeting, DbError> {
        let name = greeting.required_name()?;

        let row = match greeting.id {
            Some(id) => {
                sqlx::query_as::<_, Greeting>(
                    r#"
                    INSERT INTO greetings (id, name)
                    VALUES ($1, $2)
                    ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
                    RETURNING id, name
                    "#,
                )
                .bind(id)
                .bind(name)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Greeting>(
                    r#"
                    INSERT INTO greetings (name)
                    VALUES ($1)
                    RETURNING id, name
                    "#,
                )
                .bind(name)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM greetings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
