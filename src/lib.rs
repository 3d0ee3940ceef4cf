mod graph;
mod pending;
pub mod user;

pub use crate::graph::{append_graph, read_batch, GraphBatch};
pub use crate::pending::{PendingList, PruneOutcome};

use crate::user::UserId;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A type definition for HashSet, so the implementation can be swapped in one
/// place if needed.
pub(crate) type HashSet<T> = rustc_hash::FxHashSet<T>;

/// What a single checkpoint advance did, for reporting.
#[derive(Debug)]
pub struct RunSummary {
    /// The checkpoint: the user the crawler processed last.
    pub last_user: UserId,
    /// Lines in the current graph file.
    pub records: usize,
    /// Distinct users the current graph file has lines for.
    pub distinct_users: usize,
    /// Bytes appended onto the accumulated graph file.
    pub appended_bytes: u64,
    /// Raw line count of the pending list before pruning.
    pub pending_before: usize,
    /// Entries left in the pending list as rewritten.
    pub pending_after: usize,
    pub outcome: PruneOutcome,
}

/// Merges the current graph file into the accumulated one and prunes every
/// user through the checkpoint from the pending list, so the next crawl run
/// picks up after the last processed user.
///
/// The current graph file is parsed up front; a file that yields no checkpoint
/// leaves both the accumulated graph and the pending list untouched. The
/// append happens before the list rewrite, so an interruption in between can
/// only leave users unpruned with their graph data already saved, never the
/// other way around. Running twice with the same arguments appends the current
/// graph twice; the crawler replaces that file every cycle.
pub fn advance_checkpoint(
    users_path: &Path,
    accumulated_path: &Path,
    current_path: &Path,
) -> Result<RunSummary, Box<dyn Error>> {
    let batch = read_batch(BufReader::new(File::open(current_path)?))?;

    let appended_bytes = append_graph(accumulated_path, current_path)?;

    let mut pending = PendingList::read_from(File::open(users_path)?)?;
    let pending_before = pending.len();
    let outcome = pending.prune_through(&batch.last_user);

    // Staged next to the original so the rename cannot cross filesystems; an
    // interrupted run leaves the old list intact.
    let dir = match users_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    pending.write_to(&mut staged)?;
    staged.as_file().sync_all()?;
    staged.persist(users_path)?;

    Ok(RunSummary {
        last_user: batch.last_user,
        records: batch.records,
        distinct_users: batch.distinct_users,
        appended_bytes,
        pending_before,
        pending_after: pending.remaining(),
        outcome,
    })
}

#[derive(Debug)]
pub struct CheckpointError {
    message: String,
}

impl CheckpointError {
    pub(crate) fn new(message: impl Into<String>) -> CheckpointError {
        CheckpointError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CheckpointError {}
