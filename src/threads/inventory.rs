use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::models::{ReviewThread, ThreadStatus, ThreadsDocument};
use super::{InventoryError, Result};

pub fn load_document(path: &Path) -> Result<ThreadsDocument> {
    if !path.exists() {
        return Err(InventoryError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let document = ThreadsDocument::from_reader(BufReader::new(file))?;

    debug!(
        path = %path.display(),
        threads = document.thread_nodes().len(),
        "loaded review threads"
    );
    Ok(document)
}

/// Lazily decode the threads that are neither outdated nor resolved, in
/// document order.
///
/// Skipped threads are only checked for their status flags. A kept thread
/// must carry every field the table prints and at least one comment. Each
/// thread is decoded as the iterator reaches it, so rows before a malformed
/// thread can already be written.
pub fn open_threads(
    document: &ThreadsDocument,
) -> impl Iterator<Item = Result<ReviewThread>> + '_ {
    document
        .thread_nodes()
        .iter()
        .enumerate()
        .filter_map(|(index, node)| decode_open_thread(index, node).transpose())
}

fn decode_open_thread(index: usize, node: &Value) -> Result<Option<ReviewThread>> {
    let status = ThreadStatus::deserialize(node)
        .map_err(|source| InventoryError::MalformedThread { index, source })?;

    match status.is_skipped() {
        Some(true) => {
            debug!(
                index,
                outdated = status.is_outdated,
                resolved = ?status.is_resolved,
                "skipping thread"
            );
            return Ok(None);
        }
        Some(false) => {}
        None => return Err(InventoryError::MissingResolvedFlag { index }),
    }

    let thread = ReviewThread::deserialize(node)
        .map_err(|source| InventoryError::MalformedThread { index, source })?;

    if thread.first_comment().is_none() {
        return Err(InventoryError::NoComments { id: thread.id });
    }

    Ok(Some(thread))
}
