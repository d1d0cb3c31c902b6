use crate::clipboard::ClipboardWriter;
use crate::commands::helpers::{copy_address, select_record};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::inbox::Inbox;
use crate::index::RecordSelector;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: Option<&RecordSelector>,
    inbox: &Inbox,
    clipboard: &dyn ClipboardWriter,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(dr) = select_record(store, selector, &mut result)? {
        copy_address(clipboard, inbox, &dr.record, &mut result);
        result.affected_records.push(dr.record);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{scripted_generator, FakeClipboard};

    #[test]
    fn copies_full_address_with_configured_domain() {
        let mut store = RecordStore::open(MemBackend::new());
        store.create(&mut scripted_generator(&["starqwe12"])).unwrap();
        let clipboard = FakeClipboard::new();
        let inbox = Inbox::new("example.test", "https://example.test");

        run(&store, Some(&RecordSelector::Index(1)), &inbox, &clipboard).unwrap();

        assert_eq!(clipboard.last().as_deref(), Some("starqwe12@example.test"));
    }

    #[test]
    fn clipboard_failure_is_a_warning() {
        let mut store = RecordStore::open(MemBackend::new());
        store.create(&mut scripted_generator(&["x"])).unwrap();

        let result = run(&store, None, &Inbox::default(), &FakeClipboard::failing()).unwrap();
        assert!(result.has_problems());
        assert_eq!(result.affected_records.len(), 1);
    }
}
