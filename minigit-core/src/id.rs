use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Opaque commit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        CommitId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommitId {
    fn from(id: String) -> Self {
        CommitId(id)
    }
}

impl From<&str> for CommitId {
    fn from(id: &str) -> Self {
        CommitId(id.to_string())
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the arena be queried with a plain &str.
impl Borrow<str> for CommitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CommitId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CommitId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Source of fresh commit ids.
///
/// Repositories draw one id per created commit (including the replacement
/// commit produced by a squash). Implementations must not hand out the same
/// id twice to one repository.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> CommitId;
}

impl<F> IdGenerator for F
where
    F: Fn() -> CommitId + Send + Sync,
{
    fn next_id(&self) -> CommitId {
        self()
    }
}

/// Random v4 UUIDs in hyphenated lower-case form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> CommitId {
        CommitId(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `<prefix><n>`, counting from 1
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialGenerator {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("c")
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> CommitId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        CommitId(format!("{}{}", self.prefix, n))
    }
}
