//! Integration tests for `CsvStore` against temp-file-backed stores.

use rolo_core::{NewContact, store::ContactStore};
use tempfile::TempDir;

use crate::CsvStore;

/// A store on a fresh temp path. The `TempDir` guard must stay alive for the
/// duration of the test or the directory is removed underneath the store.
async fn store() -> (TempDir, CsvStore) {
  let dir = tempfile::tempdir().expect("tempdir");
  let store = CsvStore::open(dir.path().join("contacts.csv"))
    .await
    .expect("open store");
  (dir, store)
}

fn draft(name: &str, email: Option<&str>, phone: &str) -> NewContact {
  NewContact {
    name:  name.to_string(),
    email: email.map(str::to_string),
    phone: phone.to_string(),
  }
}

// ─── Open / load ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_file_is_empty_collection() {
  let (_dir, s) = store().await;
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn open_rejects_corrupt_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("contacts.csv");
  std::fs::write(&path, "id,name,email,phone\nabc,Ann,,5551234567\n").unwrap();

  let err = CsvStore::open(&path).await.unwrap_err();
  assert!(matches!(err, crate::Error::InvalidId { line: 2, .. }), "got {err:?}");
}

#[tokio::test]
async fn open_rejects_foreign_header() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("contacts.csv");
  std::fs::write(&path, "name,number\nAnn,5551234567\n").unwrap();

  let err = CsvStore::open(&path).await.unwrap_err();
  assert!(matches!(err, crate::Error::BadHeader { .. }), "got {err:?}");
}

// ─── Id assignment ───────────────────────────────────────────────────────────

#[tokio::test]
async fn ids_start_at_one_and_increase() {
  let (_dir, s) = store().await;

  let ann = s.create(draft("Ann", None, "5551234567")).await.unwrap();
  let bo = s.create(draft("Bo", None, "5559876543")).await.unwrap();

  assert_eq!(ann.id, 1);
  assert_eq!(bo.id, 2);
}

#[tokio::test]
async fn next_id_is_max_plus_one_not_count() {
  // Seed a file whose ids have gaps; the next id must follow the maximum.
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("contacts.csv");
  std::fs::write(
    &path,
    "id,name,email,phone\n3,Ann,,5551234567\n7,Bo,,5559876543\n",
  )
  .unwrap();

  let s = CsvStore::open(&path).await.unwrap();
  let cy = s.create(draft("Cy", None, "5550001111")).await.unwrap();
  assert_eq!(cy.id, 8);
}

// ─── Round-trip / persistence ────────────────────────────────────────────────

#[tokio::test]
async fn records_survive_reopen_in_order() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("contacts.csv");

  let s = CsvStore::open(&path).await.unwrap();
  s.create(draft("Ann, Jr.", Some("ann@example.com"), "5551234567"))
    .await
    .unwrap();
  s.create(draft("Bo", None, "5559876543")).await.unwrap();

  let reopened = CsvStore::open(&path).await.unwrap();
  let contacts = reopened.list().await.unwrap();
  assert_eq!(contacts.len(), 2);
  assert_eq!(contacts[0].name, "Ann, Jr.");
  assert_eq!(contacts[0].email.as_deref(), Some("ann@example.com"));
  assert_eq!(contacts[1].name, "Bo");
  assert_eq!(contacts[1].email, None);
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_matching_contact() {
  let (_dir, s) = store().await;
  let ann = s.create(draft("Ann", None, "5551234567")).await.unwrap();

  let fetched = s.get(ann.id).await.unwrap();
  assert_eq!(fetched, Some(ann));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let (_dir, s) = store().await;
  assert!(s.get(99).await.unwrap().is_none());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
  let (_dir, s) = store().await;
  let bo = s.create(draft("Bo", None, "5559876543")).await.unwrap();

  let updated = s
    .update(bo.id, draft("Bob", Some("bob@example.com"), "5559876543"))
    .await
    .unwrap()
    .expect("contact exists");

  assert_eq!(updated.id, bo.id);
  assert_eq!(updated.name, "Bob");
  assert_eq!(updated.email.as_deref(), Some("bob@example.com"));

  let stored = s.get(bo.id).await.unwrap().unwrap();
  assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_is_idempotent() {
  let (_dir, s) = store().await;
  let bo = s.create(draft("Bo", None, "5559876543")).await.unwrap();

  let payload = draft("Bob", Some("bob@example.com"), "5559876543");
  let once = s.update(bo.id, payload.clone()).await.unwrap().unwrap();
  let twice = s.update(bo.id, payload).await.unwrap().unwrap();

  assert_eq!(once, twice);
  assert_eq!(s.get(bo.id).await.unwrap().unwrap(), twice);
}

#[tokio::test]
async fn update_missing_returns_none_and_persists_nothing() {
  let (_dir, s) = store().await;
  s.create(draft("Ann", None, "5551234567")).await.unwrap();

  let result = s.update(99, draft("Ghost", None, "5550000000")).await.unwrap();
  assert!(result.is_none());

  let contacts = s.list().await.unwrap();
  assert_eq!(contacts.len(), 1);
  assert_eq!(contacts[0].name, "Ann");
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_matches_name_case_insensitively() {
  let (_dir, s) = store().await;
  s.create(draft("Ann", None, "5551234567")).await.unwrap();
  s.create(draft("Bob", None, "5559876543")).await.unwrap();

  let hits = s.search("an").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "Ann");
}

#[tokio::test]
async fn search_matches_email() {
  let (_dir, s) = store().await;
  s.create(draft("Ann", Some("ann@Example.COM"), "5551234567"))
    .await
    .unwrap();
  s.create(draft("Bob", None, "5559876543")).await.unwrap();

  let hits = s.search("example.com").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "Ann");
}

#[tokio::test]
async fn empty_query_matches_everything() {
  let (_dir, s) = store().await;
  s.create(draft("Ann", None, "5551234567")).await.unwrap();
  s.create(draft("Bob", None, "5559876543")).await.unwrap();

  assert_eq!(s.search("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn no_match_is_empty_not_error() {
  let (_dir, s) = store().await;
  s.create(draft("Ann", None, "5551234567")).await.unwrap();

  assert!(s.search("zzz").await.unwrap().is_empty());
}
