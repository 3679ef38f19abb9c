use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::commit::Commit;
use crate::error::{ensure_positive, Error, Result};
use crate::id::{CommitId, IdGenerator, UuidGenerator};
use crate::snapshot::CommitRecord;

/// A named, single-branch history of commits.
///
/// Commits live in an arena keyed by id; each one links to its predecessor by
/// id. The arena holds exactly the commits reachable from `head`: whatever an
/// operation unlinks is removed from it in the same call.
pub struct Repository {
    name: String,
    head: Option<CommitId>,
    commits: HashMap<CommitId, Commit>,
    generator: Box<dyn IdGenerator>,
}

/// Configures a [`Repository`] before it is created
pub struct RepositoryBuilder {
    name: String,
    generator: Box<dyn IdGenerator>,
}

impl RepositoryBuilder {
    /// Use a custom id source instead of random UUIDs
    pub fn id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Create an empty repository
    pub fn build(self) -> Result<Repository> {
        if self.name.is_empty() {
            return Err(Error::InvalidArgument(
                "repository name must not be empty".to_string(),
            ));
        }

        Ok(Repository {
            name: self.name,
            head: None,
            commits: HashMap::new(),
            generator: self.generator,
        })
    }

    /// Create a repository holding an existing chain.
    ///
    /// `records` are ordered newest first. Ids are kept as given and must be
    /// unique.
    pub fn restore(self, records: impl IntoIterator<Item = CommitRecord>) -> Result<Repository> {
        let mut repo = self.build()?;
        let records: Vec<CommitRecord> = records.into_iter().collect();

        // Link oldest first so every predecessor already exists
        for record in records.into_iter().rev() {
            if repo.commits.contains_key(&record.id) {
                return Err(Error::DuplicateCommitId(record.id));
            }
            let commit = Commit::new(record.id.clone(), record.message, repo.head.take());
            repo.commits.insert(record.id.clone(), commit);
            repo.head = Some(record.id);
        }

        debug!(repo = %repo.name, commits = repo.commits.len(), "restored repository");
        Ok(repo)
    }
}

impl Repository {
    /// Create an empty repository with random commit ids
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> RepositoryBuilder {
        RepositoryBuilder {
            name: name.into(),
            generator: Box::new(UuidGenerator),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the most recent commit, if any
    pub fn head(&self) -> Option<&CommitId> {
        self.head.as_ref()
    }

    pub fn head_commit(&self) -> Option<&Commit> {
        self.head.as_ref().and_then(|id| self.commits.get(id))
    }

    /// Number of commits in the chain
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Check if a commit with the given id is part of the chain
    pub fn contains(&self, id: &str) -> bool {
        self.commits.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Commit> {
        self.commits.get(id)
    }

    /// Iterate over the chain, most recent first
    pub fn iter(&self) -> Chain<'_> {
        Chain::new(&self.commits, self.head.as_ref())
    }

    /// Up to `n` most recent commits, most recent first
    pub fn log(&self, n: usize) -> Result<Vec<&Commit>> {
        ensure_positive(n, "history length")?;
        Ok(self.iter().take(n).collect())
    }

    /// Render up to `n` most recent commits, one `<id>: <message>` per line.
    ///
    /// Returns an empty string for an empty repository.
    pub fn history(&self, n: usize) -> Result<String> {
        let lines: Vec<String> = self.log(n)?.iter().map(|c| c.to_string()).collect();
        // Only ASCII control characters and spaces count as padding
        Ok(lines.join("\n").trim_matches(|c: char| c <= ' ').to_string())
    }

    /// Append a commit on top of the current head and return its id
    pub fn commit(&mut self, message: impl Into<String>) -> CommitId {
        let id = self.fresh_id();
        let commit = Commit::new(id.clone(), message, self.head.take());
        self.commits.insert(id.clone(), commit);

        debug!(repo = %self.name, id = %id, "created commit");
        self.head = Some(id.clone());
        id
    }

    /// Move head back by `n` commits, emptying the repository if the chain
    /// is shorter than that
    pub fn reset(&mut self, n: usize) -> Result<()> {
        ensure_positive(n, "reset distance")?;

        let mut current = self.head.take();
        let mut discarded = 0usize;
        for _ in 0..n {
            let Some(id) = current.take() else { break };
            current = self.commits.remove(&id).and_then(Commit::into_predecessor);
            discarded += 1;
        }
        self.head = current;

        debug!(
            repo = %self.name,
            discarded,
            head = ?self.head.as_ref().map(CommitId::as_str),
            "reset head"
        );
        Ok(())
    }

    /// Remove one commit, linking its newer neighbour to its older one.
    ///
    /// Returns false and leaves the chain untouched if `id` is not present.
    pub fn drop_commit(&mut self, id: &str) -> bool {
        let Some(dropped) = self.commits.remove(id) else {
            trace!(repo = %self.name, id, "drop: commit not found");
            return false;
        };

        self.relink(id, dropped.into_predecessor());
        debug!(repo = %self.name, id, "dropped commit");
        true
    }

    /// Merge the commit `id` with its predecessor into one new commit.
    ///
    /// The replacement's message is `SQUASHED: <newer>/<older>` and it links
    /// to the older commit's predecessor. Returns false, without changes, if
    /// `id` is absent or is the oldest commit.
    pub fn squash(&mut self, id: &str) -> bool {
        let older_id = match self.commits.get(id).map(Commit::predecessor) {
            Some(Some(older)) => older.clone(),
            Some(None) => {
                trace!(repo = %self.name, id, "squash: oldest commit has no predecessor");
                return false;
            }
            None => {
                trace!(repo = %self.name, id, "squash: commit not found");
                return false;
            }
        };

        if !self.commits.contains_key(&older_id) {
            return false;
        }

        // Drawn while both commits are still present so it matches neither
        let squashed_id = self.fresh_id();
        let (Some(newer), Some(older)) = (self.commits.remove(id), self.commits.remove(&older_id))
        else {
            return false;
        };

        let message = format!("SQUASHED: {}/{}", newer.message(), older.message());
        let squashed = Commit::new(squashed_id.clone(), message, older.into_predecessor());
        self.commits.insert(squashed_id.clone(), squashed);
        self.relink(id, Some(squashed_id.clone()));

        debug!(
            repo = %self.name,
            newer = id,
            older = %older_id,
            squashed = %squashed_id,
            "squashed commits"
        );
        true
    }

    /// Next generated id not already in the chain.
    ///
    /// Restored chains keep their own ids, so a generator may hand out one
    /// of them; those are skipped.
    fn fresh_id(&self) -> CommitId {
        loop {
            let id = self.generator.next_id();
            if !self.commits.contains_key(&id) {
                break id;
            }
            trace!(repo = %self.name, id = %id, "skipping id already in chain");
        }
    }

    /// Point whatever referenced `target` (head or its newer neighbour) at
    /// `replacement` instead
    fn relink(&mut self, target: &str, replacement: Option<CommitId>) {
        if self.head.as_ref().is_some_and(|head| head == target) {
            self.head = replacement;
            return;
        }

        if let Some(newer) = self
            .commits
            .values_mut()
            .find(|c| c.predecessor().is_some_and(|p| p == target))
        {
            newer.set_predecessor(replacement);
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.head_commit() {
            Some(head) => write!(f, "{} - Current head: {}", self.name, head),
            None => write!(f, "{} - No commits", self.name),
        }
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("name", &self.name)
            .field("head", &self.head)
            .field("len", &self.commits.len())
            .finish_non_exhaustive()
    }
}

impl<'r> IntoIterator for &'r Repository {
    type Item = &'r Commit;
    type IntoIter = Chain<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
