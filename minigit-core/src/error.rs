use thiserror::Error;

use crate::id::CommitId;

/// Errors raised by repository operations
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument failed its precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A restored chain repeats a commit id
    #[error("duplicate commit id in snapshot: {0}")]
    DuplicateCommitId(CommitId),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject a zero count before anything is touched
pub(crate) fn ensure_positive(n: usize, what: &str) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be positive, got {}",
            what, n
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive(1, "n").is_ok());
        assert!(ensure_positive(usize::MAX, "n").is_ok());

        let err = ensure_positive(0, "n").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid argument: n must be positive, got 0");
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = Error::DuplicateCommitId(CommitId::new("abc"));
        assert_eq!(err.to_string(), "duplicate commit id in snapshot: abc");
    }
}
