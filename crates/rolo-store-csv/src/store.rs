//! [`CsvStore`] — the flat-file implementation of [`ContactStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Arc,
};

use tokio::sync::Mutex;

use rolo_core::{
  contact::{Contact, ContactId, NewContact},
  store::ContactStore,
};

use crate::{
  Result,
  parse::parse_document,
  serialize::serialize_document,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A rolo contact store backed by a single delimited text file.
///
/// Every operation is a full-file read; every mutation is a full-file
/// rewrite. `lock` serializes the whole load→mutate→save cycle: two
/// concurrent mutations can neither lose an update nor hand out the same id.
///
/// Cloning is cheap — the inner state is reference-counted.
#[derive(Clone, Debug)]
pub struct CsvStore {
  inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
  path: PathBuf,
  lock: Mutex<()>,
}

impl CsvStore {
  /// Open a store at `path` and probe it once, so a corrupt or unreadable
  /// file fails at startup rather than on the first request. The file itself
  /// is created lazily by the first mutation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self {
      inner: Arc::new(Inner {
        path: path.as_ref().to_path_buf(),
        lock: Mutex::new(()),
      }),
    };
    store.load().await?;
    Ok(store)
  }

  /// Read and parse the whole file. An absent file is the empty collection.
  async fn load(&self) -> Result<Vec<Contact>> {
    let raw = match tokio::fs::read_to_string(&self.inner.path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => return Err(e.into()),
    };
    parse_document(&raw)
  }

  /// Overwrite the whole file with `contacts` in order.
  async fn save(&self, contacts: &[Contact]) -> Result<()> {
    tokio::fs::write(&self.inner.path, serialize_document(contacts)).await?;
    tracing::debug!(path = %self.inner.path.display(), rows = contacts.len(), "rewrote store file");
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for CsvStore {
  type Error = crate::Error;

  async fn list(&self) -> Result<Vec<Contact>> {
    let _guard = self.inner.lock.lock().await;
    self.load().await
  }

  async fn get(&self, id: ContactId) -> Result<Option<Contact>> {
    let _guard = self.inner.lock.lock().await;
    let contacts = self.load().await?;
    Ok(contacts.into_iter().find(|c| c.id == id))
  }

  async fn create(&self, new: NewContact) -> Result<Contact> {
    let _guard = self.inner.lock.lock().await;
    let mut contacts = self.load().await?;

    let id = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    let contact = Contact {
      id,
      name:  new.name,
      email: new.email,
      phone: new.phone,
    };

    contacts.push(contact.clone());
    self.save(&contacts).await?;
    Ok(contact)
  }

  async fn update(&self, id: ContactId, new: NewContact) -> Result<Option<Contact>> {
    let _guard = self.inner.lock.lock().await;
    let mut contacts = self.load().await?;

    let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
      return Ok(None);
    };
    new.apply_to(existing);
    let updated = existing.clone();

    self.save(&contacts).await?;
    Ok(Some(updated))
  }

  async fn search(&self, query: &str) -> Result<Vec<Contact>> {
    let _guard = self.inner.lock.lock().await;
    let contacts = self.load().await?;

    // Case-insensitive on both sides; the empty needle matches everything.
    let needle = query.to_lowercase();
    Ok(
      contacts
        .into_iter()
        .filter(|c| {
          c.name.to_lowercase().contains(&needle)
            || c
              .email
              .as_deref()
              .is_some_and(|e| e.to_lowercase().contains(&needle))
        })
        .collect(),
    )
  }
}
