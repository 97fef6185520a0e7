//! Generic keyed table backing every in-memory repository.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use tokio::sync::RwLock;

use crate::infrastructure::ports::RepoError;

/// An entity the in-memory adapter can store.
pub(crate) trait Record: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Display + Send + Sync;

    const ENTITY_TYPE: &'static str;

    fn record_id(&self) -> Self::Id;

    /// Key that no two rows may share (name, or a composite scoped key).
    fn unique_key(&self) -> String;
}

/// A table of records guarded by a single `RwLock`.
///
/// Uniqueness of [`Record::unique_key`] is checked under the write lock, so
/// two concurrent inserts of the same key can never both succeed.
pub(crate) struct Table<E: Record> {
    rows: RwLock<HashMap<E::Id, E>>,
}

impl<E: Record> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: Record> Table<E> {
    pub async fn contains(&self, id: E::Id) -> bool {
        self.rows.read().await.contains_key(&id)
    }

    pub async fn get(&self, id: E::Id) -> Option<E> {
        self.rows.read().await.get(&id).cloned()
    }

    pub async fn any(&self, predicate: impl Fn(&E) -> bool) -> bool {
        self.rows.read().await.values().any(predicate)
    }

    /// Rows matching `predicate`, ordered by unique key for stable listings.
    pub async fn select(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        let mut rows: Vec<E> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect();
        rows.sort_by_cached_key(E::unique_key);
        rows
    }

    pub async fn insert(&self, record: &E) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let id = record.record_id();
        if rows.contains_key(&id) {
            return Err(RepoError::constraint(format!(
                "{} {} already exists",
                E::ENTITY_TYPE,
                id
            )));
        }
        ensure_key_free(&rows, record)?;
        rows.insert(id, record.clone());
        Ok(())
    }

    pub async fn replace(&self, record: &E) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let id = record.record_id();
        if !rows.contains_key(&id) {
            return Err(RepoError::not_found(E::ENTITY_TYPE, id));
        }
        ensure_key_free(&rows, record)?;
        rows.insert(id, record.clone());
        Ok(())
    }

    pub async fn remove(&self, id: E::Id) -> Result<(), RepoError> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found(E::ENTITY_TYPE, id))
    }
}

fn ensure_key_free<E: Record>(rows: &HashMap<E::Id, E>, record: &E) -> Result<(), RepoError> {
    let key = record.unique_key();
    let id = record.record_id();
    if rows
        .values()
        .any(|row| row.record_id() != id && row.unique_key() == key)
    {
        return Err(RepoError::constraint(format!(
            "{} '{}' already exists",
            E::ENTITY_TYPE,
            key
        )));
    }
    Ok(())
}
