use crate::clipboard::ClipboardWriter;
use crate::commands::helpers::{copy_address, open_inbox};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::generator::RecordGenerator;
use crate::inbox::{Inbox, Navigator};
use crate::store::{RecordStore, StorageBackend};

/// Makes a new address, stores it, then hands it to the clipboard and the
/// inbox viewer. Either hand-off is skipped when its collaborator is `None`.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    generator: &mut dyn RecordGenerator,
    inbox: &Inbox,
    clipboard: Option<&dyn ClipboardWriter>,
    navigator: Option<&dyn Navigator>,
) -> Result<CmdResult> {
    let record = store.create(generator)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Generated {}",
        inbox.address(&record.email)
    )));

    if let Some(clipboard) = clipboard {
        copy_address(clipboard, inbox, &record, &mut result);
    }
    if let Some(navigator) = navigator {
        open_inbox(navigator, inbox, &record, &mut result);
    }

    Ok(result.with_affected_records(vec![record]))
}
