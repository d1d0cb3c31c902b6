use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve, DisplayRecord, RecordSelector};
use crate::inbox::Inbox;
use crate::store::{RecordStore, StorageBackend};
use log::info;

/// Deletes each selected record. Selectors are resolved against the list as
/// it was before any deletion, so `delete 1 2` removes the two newest.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    inbox: &Inbox,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let mut targets = Vec::with_capacity(selectors.len());
    let mut result = CmdResult::default();

    for selector in selectors {
        match resolve(store.records(), selector)? {
            Some(dr) if targets.iter().any(|t: &DisplayRecord| t.record.id == dr.record.id) => {}
            Some(dr) => targets.push(dr),
            None => result.add_message(CmdMessage::info(format!(
                "No email with id {}, nothing to delete",
                selector
            ))),
        }
    }

    for dr in targets {
        store.delete(&dr.record.id)?;
        info!("Deleted email {}", dr.record.id);
        result.add_message(CmdMessage::success(format!(
            "Email deleted ({}): {}",
            dr.index,
            inbox.address(&dr.record.email)
        )));
        result.affected_records.push(dr.record);
    }

    Ok(result)
}
