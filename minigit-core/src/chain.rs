use std::collections::HashMap;
use std::iter::FusedIterator;

use crate::commit::Commit;
use crate::id::CommitId;

/// Walks a chain from its head towards the oldest commit
#[derive(Debug, Clone)]
pub struct Chain<'r> {
    commits: &'r HashMap<CommitId, Commit>,
    next: Option<&'r CommitId>,
}

impl<'r> Chain<'r> {
    pub(crate) fn new(commits: &'r HashMap<CommitId, Commit>, head: Option<&'r CommitId>) -> Self {
        Chain { commits, next: head }
    }
}

impl<'r> Iterator for Chain<'r> {
    type Item = &'r Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        let commit = self.commits.get(id)?;
        // Move to the older commit for the next iteration
        self.next = commit.predecessor();
        Some(commit)
    }
}

impl FusedIterator for Chain<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(links: &[(&str, Option<&str>)]) -> HashMap<CommitId, Commit> {
        links
            .iter()
            .map(|(id, pred)| {
                let commit = Commit::new(CommitId::new(*id), format!("msg {}", id), pred.map(CommitId::new));
                (CommitId::new(*id), commit)
            })
            .collect()
    }

    #[test]
    fn test_walks_newest_first() {
        let commits = arena(&[("a", None), ("b", Some("a")), ("c", Some("b"))]);
        let head = CommitId::new("c");
        let ids: Vec<&str> = Chain::new(&commits, Some(&head)).map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_chain() {
        let commits = HashMap::new();
        assert_eq!(Chain::new(&commits, None).count(), 0);
    }

    #[test]
    fn test_starts_mid_chain() {
        let commits = arena(&[("a", None), ("b", Some("a")), ("c", Some("b"))]);
        let start = CommitId::new("b");
        assert_eq!(Chain::new(&commits, Some(&start)).count(), 2);
    }

    #[test]
    fn test_stops_at_dangling_link() {
        let commits = arena(&[("b", Some("a"))]);
        let head = CommitId::new("b");
        let mut chain = Chain::new(&commits, Some(&head));
        assert_eq!(chain.next().map(|c| c.id().as_str()), Some("b"));
        assert!(chain.next().is_none());
        assert!(chain.next().is_none());
    }
}
