use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_records;
use crate::store::{matches_lowercase, RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, term: Option<&str>) -> Result<CmdResult> {
    let all = store.records();
    let mut result = CmdResult::default();

    if all.is_empty() {
        result.add_message(CmdMessage::info("No emails generated yet"));
        return Ok(result);
    }

    let term = term.unwrap_or("").to_lowercase();
    let listed: Vec<_> = index_records(all)
        .into_iter()
        .filter(|dr| matches_lowercase(&dr.record, &term))
        .collect();

    if listed.is_empty() {
        result.add_message(CmdMessage::info("No emails match your search"));
    }

    Ok(result.with_listed_records(listed))
}
