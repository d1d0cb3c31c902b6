//! # Display Indexes
//!
//! Record ids are millisecond timestamps (`1718000000456`), which nobody wants
//! to type. The CLI numbers the newest-first list instead: `1` is the latest
//! address, `2` the one before, and so on.
//!
//! Indexes are assigned over the full list *before* any search filter, so the
//! number shown next to an address in a filtered listing still refers to that
//! address in a later `delete` or `open`.
//!
//! A [`RecordSelector`] accepts either form. Short all-digit input (fewer
//! than [`ID_MIN_LEN`] characters) is an index; anything else is an id.

use crate::error::{MailzError, Result};
use crate::model::EmailRecord;
use std::fmt;
use std::str::FromStr;

/// Ids are epoch milliseconds, which have had at least this many digits since 2001.
pub const ID_MIN_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: EmailRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(usize),
    Id(String),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Index(n) => write!(f, "{}", n),
            RecordSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for RecordSelector {
    type Err = MailzError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MailzError::Api("Empty selector".to_string()));
        }
        if s.len() < ID_MIN_LEN && s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) | Err(_) => Err(MailzError::Api(format!(
                    "Invalid index: {} (indexes start at 1)",
                    s
                ))),
                Ok(n) => Ok(RecordSelector::Index(n)),
            };
        }
        Ok(RecordSelector::Id(s.to_string()))
    }
}

/// Numbers records 1..n in their stored (newest-first) order.
pub fn index_records(records: &[EmailRecord]) -> Vec<DisplayRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}

/// Resolves a selector against the full list.
///
/// Returns `Ok(None)` for an id that is not present, since removing or
/// touching an absent id is a no-op rather than a failure. An index outside
/// the list is an error: the user pointed at a row that does not exist.
pub fn resolve(records: &[EmailRecord], selector: &RecordSelector) -> Result<Option<DisplayRecord>> {
    let indexed = index_records(records);
    match selector {
        RecordSelector::Index(n) => indexed
            .into_iter()
            .find(|dr| dr.index == *n)
            .map(Some)
            .ok_or_else(|| MailzError::RecordNotFound(format!("index {}", n))),
        RecordSelector::Id(id) => Ok(indexed.into_iter().find(|dr| &dr.record.id == id)),
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
