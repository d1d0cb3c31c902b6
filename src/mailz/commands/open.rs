use crate::clipboard::ClipboardWriter;
use crate::commands::helpers::{copy_address, open_inbox, select_record};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::inbox::{Inbox, Navigator};
use crate::index::RecordSelector;
use crate::store::{RecordStore, StorageBackend};

/// Copies the address and opens its inbox. With no selector the latest
/// address is used.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: Option<&RecordSelector>,
    inbox: &Inbox,
    clipboard: Option<&dyn ClipboardWriter>,
    navigator: &dyn Navigator,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(dr) = select_record(store, selector, &mut result)? else {
        return Ok(result);
    };

    if let Some(clipboard) = clipboard {
        copy_address(clipboard, inbox, &dr.record, &mut result);
    }
    open_inbox(navigator, inbox, &dr.record, &mut result);

    Ok(result.with_affected_records(vec![dr.record]))
}
