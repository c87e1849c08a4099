use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::AppState;
use db::models::{Greeting, NewGreeting};
use db::DbError;

/// Request body for `POST /greetings`.
///
/// `id` may be supplied to overwrite an existing row.  `name` is left
/// optional here so that a null/absent value is rejected by the store as a
/// constraint violation instead of failing JSON decoding.
#[derive(serde::Deserialize)]
pub struct CreateGreetingDto {
    pub id: Option<i64>,
    pub name: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Greeting>>, StatusCode> {
    match state.store.list_all().await {
        Ok(greetings) => Ok(Json(greetings)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateGreetingDto>,
) -> Result<Json<Greeting>, StatusCode> {
    let greeting = NewGreeting {
        id: payload.id,
        name: payload.name,
    };

    match state.store.save(greeting).await {
        Ok(saved) => Ok(Json(saved)),
        Err(DbError::ConstraintViolation(_)) => Err(StatusCode::BAD_REQUEST),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Delete is idempotent: removing a row that does not exist still answers
/// 200 with an empty body, matching the contract the frontend relies on.
pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
    match state.store.delete_by_id(id).await {
        Ok(_removed) => Ok(StatusCode::OK),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
