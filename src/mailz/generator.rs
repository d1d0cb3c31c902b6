//! Local-part generators.
//!
//! The store only needs something that hands back a fresh [`EmailRecord`];
//! how the name is made up is a generator detail. Two strategies ship:
//! a fixed prefix plus random suffix, and words drawn from a remote word list.

use crate::error::{MailzError, Result};
use crate::model::{EmailRecord, SessionClock};
use log::debug;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const PREFIXES: &[&str] = &[
    "cool", "super", "mega", "ultra", "hyper", "cyber", "tech", "digi", "pixel", "ninja", "swift",
    "buzz", "star", "pro", "max", "prime",
];

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 5;
const WORD_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Produces a new record each time it is called.
pub trait RecordGenerator {
    fn generate(&mut self) -> Result<EmailRecord>;
}

impl<F> RecordGenerator for F
where
    F: FnMut() -> Result<EmailRecord>,
{
    fn generate(&mut self) -> Result<EmailRecord> {
        self()
    }
}

/// Which naming strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Prefix,
    Words,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Prefix => write!(f, "prefix"),
            GeneratorKind::Words => write!(f, "words"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = MailzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "prefix" => Ok(GeneratorKind::Prefix),
            "words" => Ok(GeneratorKind::Words),
            other => Err(MailzError::Config(format!(
                "Unknown generator '{}' (expected 'prefix' or 'words')",
                other
            ))),
        }
    }
}

/// `<prefix><5 random [a-z0-9]>`, e.g. `ninjak3x9q`.
pub struct PrefixGenerator<R: Rng = ThreadRng> {
    rng: R,
    clock: SessionClock,
}

impl PrefixGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PrefixGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PrefixGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            clock: SessionClock::new(),
        }
    }

    pub fn local_part(&mut self) -> String {
        let prefix = PREFIXES.choose(&mut self.rng).copied().unwrap_or("cool");
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[self.rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        format!("{}{}", prefix, suffix)
    }
}

impl<R: Rng> RecordGenerator for PrefixGenerator<R> {
    fn generate(&mut self) -> Result<EmailRecord> {
        let email = self.local_part();
        Ok(EmailRecord::new(email, self.clock.now_millis()))
    }
}

/// Concatenates words fetched from a random-word service, e.g.
/// `GET https://random-word-api.herokuapp.com/word?number=4` returning
/// `["maple","orbit","quiet","lantern"]`.
pub struct WordApiGenerator {
    client: reqwest::blocking::Client,
    url: String,
    count: usize,
    clock: SessionClock,
}

impl WordApiGenerator {
    pub fn new(url: impl Into<String>, count: usize) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(WORD_API_TIMEOUT)
            .build()
            .map_err(|e| MailzError::Generation(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
            count: count.max(1),
            clock: SessionClock::new(),
        })
    }

    fn fetch_words(&self) -> Result<Vec<String>> {
        debug!("Fetching {} word(s) from {}", self.count, self.url);
        let response = self
            .client
            .get(&self.url)
            .query(&[("number", self.count)])
            .send()
            .map_err(|e| MailzError::Generation(format!("word service unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailzError::Generation(format!(
                "word service returned {}",
                status
            )));
        }

        response
            .json::<Vec<String>>()
            .map_err(|e| MailzError::Generation(format!("unexpected word service reply: {}", e)))
    }
}

impl RecordGenerator for WordApiGenerator {
    fn generate(&mut self) -> Result<EmailRecord> {
        let words = self.fetch_words()?;
        let email = join_words(words.as_slice())?;
        Ok(EmailRecord::new(email, self.clock.now_millis()))
    }
}

/// Lowercases and concatenates words, keeping only ASCII letters and digits.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> Result<String> {
    let local_part: String = words
        .iter()
        .flat_map(|w| w.as_ref().chars())
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if local_part.is_empty() {
        return Err(MailzError::Generation(
            "word service returned no usable words".to_string(),
        ));
    }
    Ok(local_part)
}
