//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! record store and the outside-world collaborators (generator, clipboard,
//! browser) and hands them to the right command.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings into [`RecordSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no terminal I/O.
//!
//! ## Generic Over StorageBackend
//!
//! `MailzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `MailzApi<FsBackend>`
//! - Testing: `MailzApi<MemBackend>`
//!
//! Collaborators default to the real system ones and can be swapped with
//! `with_generator`, `with_clipboard` and `with_navigator`.

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::commands;
use crate::config::MailzConfig;
use crate::error::Result;
use crate::generator::{GeneratorKind, PrefixGenerator, RecordGenerator, WordApiGenerator};
use crate::inbox::{BrowserNavigator, Inbox, Navigator};
use crate::index::{parse_selectors, RecordSelector};
use crate::store::{RecordStore, StorageBackend};

/// Per-call switches for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Overrides the configured generator
    pub kind: Option<GeneratorKind>,
    pub copy: bool,
    pub open: bool,
}

impl GenerateOptions {
    /// Options as the config file asks for them.
    pub fn from_config(config: &MailzConfig) -> Self {
        Self {
            kind: None,
            copy: config.copy_on_create,
            open: config.open_on_create,
        }
    }
}

/// The main API facade for mailz operations.
pub struct MailzApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::MailzPaths,
    config: MailzConfig,
    inbox: Inbox,
    generator: Option<Box<dyn RecordGenerator>>,
    clipboard: Box<dyn ClipboardWriter>,
    navigator: Box<dyn Navigator>,
}

impl<B: StorageBackend> MailzApi<B> {
    pub fn new(backend: B, paths: commands::MailzPaths, config: MailzConfig) -> Self {
        Self {
            store: RecordStore::open(backend),
            paths,
            inbox: config.inbox(),
            config,
            generator: None,
            clipboard: Box::new(SystemClipboard),
            navigator: Box::new(BrowserNavigator),
        }
    }

    /// Uses `generator` for every `generate` call instead of the configured one.
    pub fn with_generator(mut self, generator: impl RecordGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl ClipboardWriter + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    pub fn generate(&mut self, options: GenerateOptions) -> Result<commands::CmdResult> {
        let mut configured;
        let generator: &mut dyn RecordGenerator = match (&mut self.generator, options.kind) {
            (Some(injected), None) => injected.as_mut(),
            (_, kind) => {
                configured = build_generator(&self.config, kind)?;
                configured.as_mut()
            }
        };
        let clipboard = options.copy.then_some(self.clipboard.as_ref());
        let navigator = options.open.then_some(self.navigator.as_ref());
        commands::generate::run(&mut self.store, generator, &self.inbox, clipboard, navigator)
    }

    pub fn list(&self, term: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, term)
    }

    pub fn delete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &self.inbox, &selectors)
    }

    pub fn clear(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, confirmed)
    }

    pub fn open(&self, selector: Option<&str>, copy: bool) -> Result<commands::CmdResult> {
        let selector = parse_optional(selector)?;
        let clipboard = copy.then_some(self.clipboard.as_ref());
        commands::open::run(
            &self.store,
            selector.as_ref(),
            &self.inbox,
            clipboard,
            self.navigator.as_ref(),
        )
    }

    pub fn copy(&self, selector: Option<&str>) -> Result<commands::CmdResult> {
        let selector = parse_optional(selector)?;
        commands::copy::run(
            &self.store,
            selector.as_ref(),
            &self.inbox,
            self.clipboard.as_ref(),
        )
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn data_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, &self.paths)
    }

    pub fn settings(&self) -> &MailzConfig {
        &self.config
    }

    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    pub fn record_count(&self) -> usize {
        self.store.records().len()
    }
}

fn parse_optional(selector: Option<&str>) -> Result<Option<RecordSelector>> {
    selector.map(str::parse).transpose()
}

fn build_generator(
    config: &MailzConfig,
    kind: Option<GeneratorKind>,
) -> Result<Box<dyn RecordGenerator>> {
    let generator: Box<dyn RecordGenerator> = match kind.unwrap_or(config.generator) {
        GeneratorKind::Prefix => Box::new(PrefixGenerator::new()),
        GeneratorKind::Words => Box::new(WordApiGenerator::new(
            config.word_api_url.clone(),
            config.word_count,
        )?),
    };
    Ok(generator)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MailzPaths, MessageLevel};
