pub mod error;
pub mod id;
pub mod commit;
pub mod chain;
pub mod repository;
pub mod snapshot;
pub mod shared;

pub use error::{Error, Result};
pub use id::{CommitId, IdGenerator, SequentialGenerator, UuidGenerator};
pub use commit::Commit;
pub use chain::Chain;
pub use repository::{Repository, RepositoryBuilder};
pub use snapshot::{CommitRecord, Snapshot};
pub use shared::SharedRepository;
