use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::id::CommitId;
use crate::repository::Repository;
use crate::snapshot::Snapshot;

/// Cloneable handle that serialises access to one repository.
///
/// Every call holds a single exclusive lock for its whole duration.
#[derive(Debug, Clone)]
pub struct SharedRepository {
    inner: Arc<Mutex<Repository>>,
}

impl SharedRepository {
    pub fn new(repository: Repository) -> Self {
        SharedRepository {
            inner: Arc::new(Mutex::new(repository)),
        }
    }

    /// Run `f` against the repository while holding the lock
    pub async fn with<T>(&self, f: impl FnOnce(&mut Repository) -> T) -> T {
        let mut repo = self.inner.lock().await;
        f(&mut *repo)
    }

    pub async fn head(&self) -> Option<CommitId> {
        self.inner.lock().await.head().cloned()
    }

    /// Same text as the repository's `Display`
    pub async fn describe(&self) -> String {
        self.inner.lock().await.to_string()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.inner.lock().await.contains(id)
    }

    pub async fn history(&self, n: usize) -> Result<String> {
        self.inner.lock().await.history(n)
    }

    pub async fn commit(&self, message: impl Into<String>) -> CommitId {
        self.inner.lock().await.commit(message)
    }

    pub async fn reset(&self, n: usize) -> Result<()> {
        self.inner.lock().await.reset(n)
    }

    pub async fn drop_commit(&self, id: &str) -> bool {
        self.inner.lock().await.drop_commit(id)
    }

    pub async fn squash(&self, id: &str) -> bool {
        self.inner.lock().await.squash(id)
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.inner.lock().await.snapshot()
    }
}

impl From<Repository> for SharedRepository {
    fn from(repository: Repository) -> Self {
        Self::new(repository)
    }
}
