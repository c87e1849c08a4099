//! Contract tests for the greeting store.
//!
//! These run against `MockGreetingStore` so no real Postgres connection is
//! required.  The Postgres repository implements the same trait with the
//! same semantics and is exercised by environments that have a live
//! database.

use crate::mock::MockGreetingStore;
use crate::models::NewGreeting;
use crate::repository::GreetingStore;
use crate::DbError;

fn named(name: &str) -> NewGreeting {
    NewGreeting {
        id: None,
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn save_assigns_fresh_sequential_ids() {
    let store = MockGreetingStore::new();

    let first = store.save(named("hello")).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "hello");

    let second = store.save(named("world")).await.unwrap();
    assert_eq!(second.id, 2);
    assert_eq!(second.name, "world");
}

#[tokio::test]
async fn list_all_returns_every_row() {
    let store = MockGreetingStore::new();
    store.save(named("hello")).await.unwrap();
    store.save(named("world")).await.unwrap();

    let rows = store.list_all().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|g| g.id == 1 && g.name == "hello"));
    assert!(rows.iter().any(|g| g.id == 2 && g.name == "world"));
}

#[tokio::test]
async fn delete_removes_only_the_addressed_row() {
    let store = MockGreetingStore::new();
    store.save(named("hello")).await.unwrap();
    store.save(named("world")).await.unwrap();

    assert!(store.delete_by_id(1).await.unwrap());

    let rows = store.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 2);
    assert_eq!(rows[0].name, "world");
}

#[tokio::test]
async fn delete_is_an_idempotent_success() {
    let store = MockGreetingStore::new();
    store.save(named("once")).await.unwrap();

    assert!(store.delete_by_id(1).await.unwrap());
    // Second delete of the same id reports that nothing existed, but it is
    // still an Ok outcome and leaves the table intact.
    assert!(!store.delete_by_id(1).await.unwrap());
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_of_an_unknown_id_is_a_no_op() {
    let store = MockGreetingStore::new();
    store.save(named("keep")).await.unwrap();

    assert!(!store.delete_by_id(42).await.unwrap());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn save_without_name_fails_and_leaves_the_table_unchanged() {
    let store = MockGreetingStore::new();
    store.save(named("keep")).await.unwrap();

    let err = store
        .save(NewGreeting {
            id: None,
            name: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::ConstraintViolation(_)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn save_with_empty_name_fails() {
    let store = MockGreetingStore::new();

    let err = store.save(named("")).await.unwrap_err();
    assert!(matches!(err, DbError::ConstraintViolation(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn duplicate_names_persist_as_separate_rows() {
    let store = MockGreetingStore::new();
    let first = store.save(named("twin")).await.unwrap();
    let second = store.save(named("twin")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn save_with_an_existing_id_replaces_the_row() {
    let store = MockGreetingStore::new();
    let original = store.save(named("before")).await.unwrap();

    let replaced = store
        .save(NewGreeting {
            id: Some(original.id),
            name: Some("after".into()),
        })
        .await
        .unwrap();
    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.name, "after");

    let rows = store.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "after");
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let store = MockGreetingStore::new();
    store.save(named("first")).await.unwrap();
    store.delete_by_id(1).await.unwrap();

    let next = store.save(named("second")).await.unwrap();
    assert_eq!(next.id, 2);
}
