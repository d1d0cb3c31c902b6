use crate::error::{MailzError, Result};
use log::debug;

pub const DEFAULT_DOMAIN: &str = "bugbug-inbox.com";
pub const DEFAULT_INBOX_URL: &str = "https://bugbug-inbox.com";

/// The external inbox service: which domain addresses live under and where
/// their mail can be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    domain: String,
    viewer_url: String,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN, DEFAULT_INBOX_URL)
    }
}

impl Inbox {
    pub fn new(domain: impl Into<String>, viewer_url: impl Into<String>) -> Self {
        let domain = domain.into();
        let viewer_url = viewer_url.into();
        Self {
            domain: domain.trim_start_matches('@').to_string(),
            viewer_url: viewer_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Full address for a local part: `coolabc12@bugbug-inbox.com`.
    pub fn address(&self, local_part: &str) -> String {
        format!("{}@{}", local_part, self.domain)
    }

    /// Where the mail for a local part can be read.
    pub fn url(&self, local_part: &str) -> String {
        format!("{}/{}", self.viewer_url, local_part)
    }
}

/// Sends the user somewhere. Fire and forget.
pub trait Navigator {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs in the system's default browser.
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<()> {
        debug!("Opening {}", url);
        open::that(url).map_err(|e| MailzError::Navigation(format!("{}: {}", url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inbox_targets_bugbug() {
        let inbox = Inbox::default();
        assert_eq!(inbox.address("coolabc12"), "coolabc12@bugbug-inbox.com");
        assert_eq!(inbox.url("coolabc12"), "https://bugbug-inbox.com/coolabc12");
    }

    #[test]
    fn normalizes_domain_and_url() {
        let inbox = Inbox::new("@example.test", "https://mail.example.test/inbox/");
        assert_eq!(inbox.domain(), "example.test");
        assert_eq!(inbox.address("x"), "x@example.test");
        assert_eq!(inbox.url("x"), "https://mail.example.test/inbox/x");
    }
}
