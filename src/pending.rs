use crate::user::UserId;
use std::io::{BufRead, BufReader, Read, Write};

/// The ordered list of users the crawler has not visited yet, one id per line.
pub struct PendingList {
    // raw lines as loaded; trimming happens on comparison and on write
    lines: Vec<String>,
}

/// Result of pruning the list through a checkpoint user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The checkpoint user was found; `removed` leading lines (the matched
    /// line included) were dropped.
    Advanced { removed: usize },
    /// The checkpoint user does not occur in the list. Nothing was removed.
    NotFound,
}

impl PendingList {
    pub fn read_from(reader: impl Read) -> std::io::Result<PendingList> {
        let mut lines = Vec::new();
        for line in BufReader::new(reader).lines() {
            lines.push(line?);
        }
        Ok(PendingList { lines })
    }

    /// Number of raw lines currently held, blank ones included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of entries that would survive a rewrite, i.e. non-blank lines.
    pub fn remaining(&self) -> usize {
        self.lines.iter().filter(|l| !l.trim().is_empty()).count()
    }

    /// Drops every line up to and including the first one matching
    /// `checkpoint`. Without a match the list is left as-is and the caller
    /// gets an explicit `NotFound` instead of a silent no-op.
    pub fn prune_through(&mut self, checkpoint: &UserId) -> PruneOutcome {
        match self.lines.iter().position(|l| checkpoint.matches_line(l)) {
            Some(index) => {
                self.lines.drain(..=index);
                PruneOutcome::Advanced { removed: index + 1 }
            }
            None => PruneOutcome::NotFound,
        }
    }

    /// Writes the remaining entries, trimmed, one per line. Blank lines are
    /// dropped regardless of where they sit in the list.
    pub fn write_to(&self, mut writer: impl Write) -> std::io::Result<()> {
        for line in &self.lines {
            let entry = line.trim();
            if !entry.is_empty() {
                writeln!(writer, "{}", entry)?;
            }
        }
        Ok(())
    }
}
