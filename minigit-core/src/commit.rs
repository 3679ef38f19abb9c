use std::fmt;

use crate::id::CommitId;

/// A single entry in the history chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Unique id, fixed at construction
    id: CommitId,
    /// Commit message, fixed at construction
    message: String,
    /// The commit immediately older than this one
    predecessor: Option<CommitId>,
}

impl Commit {
    pub(crate) fn new(id: CommitId, message: impl Into<String>, predecessor: Option<CommitId>) -> Self {
        Commit {
            id,
            message: message.into(),
            predecessor,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn predecessor(&self) -> Option<&CommitId> {
        self.predecessor.as_ref()
    }

    /// Check if this is the oldest commit of its chain
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }

    /// The predecessor link is the only mutable part of a commit.
    pub(crate) fn set_predecessor(&mut self, predecessor: Option<CommitId>) {
        self.predecessor = predecessor;
    }

    pub(crate) fn into_predecessor(self) -> Option<CommitId> {
        self.predecessor
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let commit = Commit::new(CommitId::new("c1"), "init", None);
        assert_eq!(commit.to_string(), "c1: init");
    }

    #[test]
    fn test_root_and_predecessor() {
        let root = Commit::new(CommitId::new("c1"), "init", None);
        let child = Commit::new(CommitId::new("c2"), "next", Some(root.id().clone()));

        assert!(root.is_root());
        assert!(!child.is_root());
        assert_eq!(child.predecessor(), Some(&CommitId::new("c1")));
    }

    #[test]
    fn test_relink_keeps_id_and_message() {
        let mut commit = Commit::new(CommitId::new("c3"), "third", Some(CommitId::new("c2")));
        commit.set_predecessor(Some(CommitId::new("c1")));

        assert_eq!(commit.id(), "c3");
        assert_eq!(commit.message(), "third");
        assert_eq!(commit.into_predecessor(), Some(CommitId::new("c1")));
    }

    #[test]
    fn test_empty_message_display() {
        let commit = Commit::new(CommitId::new("c1"), "", None);
        assert_eq!(commit.to_string(), "c1: ");
    }
}
