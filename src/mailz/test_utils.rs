use crate::clipboard::ClipboardWriter;
use crate::error::{MailzError, Result};
use crate::inbox::Navigator;
use crate::model::EmailRecord;
use std::cell::RefCell;

/// Clipboard that remembers what it was given.
#[derive(Default)]
pub struct FakeClipboard {
    pub copied: RefCell<Vec<String>>,
    pub fail: bool,
}

impl FakeClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.copied.borrow().last().cloned()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(MailzError::Clipboard("no clipboard in tests".to_string()));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Navigator that remembers the URLs it was asked to open.
#[derive(Default)]
pub struct FakeNavigator {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl FakeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.opened.borrow().last().cloned()
    }
}

impl Navigator for FakeNavigator {
    fn open(&self, url: &str) -> Result<()> {
        if self.fail {
            return Err(MailzError::Navigation("no browser in tests".to_string()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Generator that cycles through `emails`, stamping strictly increasing times.
pub fn scripted_generator(emails: &[&str]) -> impl FnMut() -> Result<EmailRecord> {
    let emails: Vec<String> = emails.iter().map(|e| e.to_string()).collect();
    let mut calls: i64 = 0;
    move || {
        let email = emails[calls as usize % emails.len()].clone();
        calls += 1;
        Ok(EmailRecord::new(email, 1_700_000_000_000 + calls))
    }
}
