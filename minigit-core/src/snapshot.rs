use serde::{Deserialize, Serialize};

use crate::commit::Commit;
use crate::error::Result;
use crate::id::{CommitId, IdGenerator};
use crate::repository::Repository;

/// One commit as it appears in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: CommitId,
    pub message: String,
}

impl CommitRecord {
    pub fn new(id: impl Into<CommitId>, message: impl Into<String>) -> Self {
        CommitRecord {
            id: id.into(),
            message: message.into(),
        }
    }
}

impl From<&Commit> for CommitRecord {
    fn from(commit: &Commit) -> Self {
        CommitRecord {
            id: commit.id().clone(),
            message: commit.message().to_string(),
        }
    }
}

/// Serialisable form of a repository: its name and its chain, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub commits: Vec<CommitRecord>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Repository {
    /// Capture the current chain
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name().to_string(),
            commits: self.iter().map(CommitRecord::from).collect(),
        }
    }

    /// Rebuild a repository from a snapshot; new commits get random ids
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        Self::builder(snapshot.name).restore(snapshot.commits)
    }

    /// Rebuild a repository from a snapshot, drawing new ids from `generator`
    pub fn from_snapshot_with(snapshot: Snapshot, generator: impl IdGenerator + 'static) -> Result<Self> {
        Self::builder(snapshot.name)
            .id_generator(generator)
            .restore(snapshot.commits)
    }
}
