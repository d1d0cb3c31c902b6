use crate::clipboard::ClipboardWriter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MailzError, Result};
use crate::inbox::{Inbox, Navigator};
use crate::index::{resolve, DisplayRecord, RecordSelector};
use crate::model::EmailRecord;
use crate::store::{RecordStore, StorageBackend};
use log::warn;

/// Picks the record a user pointed at, or the latest one when no selector
/// is given. `Ok(None)` means there was nothing to pick; the reason has
/// already been added to `result`.
pub fn select_record<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: Option<&RecordSelector>,
    result: &mut CmdResult,
) -> Result<Option<DisplayRecord>> {
    if store.records().is_empty() {
        result.add_message(CmdMessage::error("No emails generated yet"));
        return Ok(None);
    }

    let latest = RecordSelector::Index(1);
    let selector = selector.unwrap_or(&latest);
    let found = resolve(store.records(), selector)?;
    if found.is_none() {
        result.add_message(CmdMessage::error(format!("No email with id {}", selector)));
    }
    Ok(found)
}

/// Copies the full address. Failure is reported, never raised.
pub fn copy_address(
    clipboard: &dyn ClipboardWriter,
    inbox: &Inbox,
    record: &EmailRecord,
    result: &mut CmdResult,
) {
    let address = inbox.address(&record.email);
    match clipboard.copy(&address) {
        Ok(()) => result.add_message(CmdMessage::info(format!(
            "Copied {} to clipboard",
            address
        ))),
        Err(e) => {
            warn!("Clipboard copy failed: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Failed to copy to clipboard: {}",
                clipboard_reason(&e)
            )));
        }
    }
}

/// Opens the inbox viewer for a record. Failure is reported, never raised.
pub fn open_inbox(
    navigator: &dyn Navigator,
    inbox: &Inbox,
    record: &EmailRecord,
    result: &mut CmdResult,
) {
    let url = inbox.url(&record.email);
    match navigator.open(&url) {
        Ok(()) => result.add_message(CmdMessage::info(format!("Opening {}", url))),
        Err(e) => {
            warn!("Opening inbox failed: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Could not open a browser, visit {} instead",
                url
            )));
        }
    }
}

fn clipboard_reason(error: &MailzError) -> String {
    match error {
        MailzError::Clipboard(reason) => reason.clone(),
        other => other.to_string(),
    }
}
