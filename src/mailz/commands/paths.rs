use crate::commands::{CmdResult, MailzPaths};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, paths: &MailzPaths) -> Result<CmdResult> {
    let listed = vec![
        ("data".to_string(), paths.data_dir.clone()),
        ("emails".to_string(), store.slot_path()),
        ("config".to_string(), paths.config_dir().join("config.json")),
    ];
    Ok(CmdResult::default().with_paths(listed))
}
