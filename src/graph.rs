use crate::user::UserId;
use crate::{CheckpointError, HashSet};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read};
use std::path::Path;

/// What one crawl run produced, read off the current graph file.
///
/// The file is tab-separated; the first field of each line names the user the
/// line belongs to, tagged by the crawler. As a file, it looks like:
/// ```text
/// id_40075	id_18351,id_90210
/// id_18351	NONE
/// ```
/// Only the last line decides the checkpoint; the other lines merely feed the
/// record and distinct-user counts reported after a merge.
#[derive(Debug)]
pub struct GraphBatch {
    pub last_user: UserId,
    pub records: usize,
    pub distinct_users: usize,
}

/// Single pass over the current graph file.
///
/// Mid-file lines whose first field carries no user id only fall out of the
/// distinct count; the final line must yield one, since it becomes the
/// checkpoint the pending list is pruned against.
pub fn read_batch(reader: impl Read) -> Result<GraphBatch, Box<dyn Error>> {
    // The crawler writes raw text fields, so quote characters are data, not
    // syntax. Lines may have varying field counts.
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = 0;
    let mut seen: HashSet<UserId> = HashSet::default();
    let mut tail_field: Option<String> = None;
    for result in rdr.records() {
        let record = result?;
        records += 1;
        let field = record.get(0).unwrap_or("");
        if let Some(user) = UserId::from_graph_field(field) {
            seen.insert(user);
        }
        tail_field = Some(field.to_string());
    }

    let tail_field = tail_field.ok_or_else(|| {
        CheckpointError::new("The current graph file is empty, there is no checkpoint to read")
    })?;
    let last_user = UserId::from_graph_field(&tail_field).ok_or_else(|| {
        CheckpointError::new(format!(
            "The last graph line does not name a user in its first field: {:?}",
            tail_field
        ))
    })?;

    Ok(GraphBatch {
        last_user,
        records,
        distinct_users: seen.len(),
    })
}

/// Appends the current graph file onto the accumulated one, byte for byte,
/// creating the accumulated file when it does not exist yet. Returns the
/// number of bytes appended.
pub fn append_graph(accumulated: &Path, current: &Path) -> io::Result<u64> {
    let mut source = BufReader::new(File::open(current)?);
    let mut target = OpenOptions::new()
        .create(true)
        .append(true)
        .open(accumulated)?;
    io::copy(&mut source, &mut target)
}
