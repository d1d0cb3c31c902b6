use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

/// Removes every record. This cannot be undone, so the caller must have asked
/// the user first and pass `confirmed = true`.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.records().is_empty() {
        result.add_message(CmdMessage::info("No emails to clear."));
        return Ok(result);
    }

    if !confirmed {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    let removed = store.records().to_vec();
    store.clear()?;
    result.add_message(CmdMessage::success(format!(
        "All emails cleared ({})",
        removed.len()
    )));
    Ok(result.with_affected_records(removed))
}
