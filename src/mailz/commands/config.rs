use crate::commands::{CmdMessage, CmdResult, MailzPaths};
use crate::config::{MailzConfig, CONFIG_KEYS};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &MailzPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir();
    let mut config = MailzConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            let entries = CONFIG_KEYS
                .iter()
                .map(|key| Ok((key.to_string(), config.get(key)?)))
                .collect::<Result<Vec<_>>>()?;
            result = result.with_config_entries(entries);
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result = result.with_config_entries(vec![(key, value)]);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            let stored = config.get(&key)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            result = result.with_config_entries(vec![(key, stored)]);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MailzError;
    use tempfile::TempDir;

    #[test]
    fn shows_every_key() {
        let dir = TempDir::new().unwrap();
        let paths = MailzPaths::new(dir.path().to_path_buf());

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config_entries.len(), CONFIG_KEYS.len());
        assert_eq!(result.config_entries[0].0, "domain");
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let paths = MailzPaths::new(dir.path().to_path_buf());

        run(
            &paths,
            ConfigAction::Set("word-count".into(), "6".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowKey("word-count".into())).unwrap();
        assert_eq!(result.config_entries, vec![("word-count".to_string(), "6".to_string())]);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = MailzPaths::new(dir.path().to_path_buf());

        let err = run(&paths, ConfigAction::ShowKey("theme".into())).unwrap_err();
        assert!(matches!(err, MailzError::Config(_)));
        assert!(!dir.path().join("config.json").exists());
    }
}
