use super::backend::StorageBackend;
use crate::error::{MailzError, Result};
use crate::generator::RecordGenerator;
use crate::model::EmailRecord;
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Name of the slot holding the serialized record list.
pub const RECORDS_SLOT: &str = "randomEmails";

/// The authoritative, newest-first list of generated addresses.
///
/// Every mutation updates the in-memory list first and then persists the
/// whole list. A failed write is returned to the caller but the in-memory
/// list is kept as is; the next successful write brings storage back in line.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    records: Vec<EmailRecord>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Opens the store and loads whatever is persisted.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            records: Vec::new(),
        };
        store.load();
        store
    }

    /// Re-reads the persisted list, replacing the in-memory one.
    ///
    /// Never fails: a missing slot, a read error, or a blob that does not
    /// parse all yield an empty list. An unparseable blob is also removed so
    /// it is not trusted again on the next load.
    pub fn load(&mut self) -> Vec<EmailRecord> {
        self.records = match self.backend.read(RECORDS_SLOT) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<EmailRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => self.discard(&e),
            },
            // Bytes that are not UTF-8 cannot be JSON either
            Err(MailzError::Io(e)) if e.kind() == ErrorKind::InvalidData => self.discard(&e),
            Err(e) => {
                warn!("Failed to read email list: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} email(s)", self.records.len());
        self.records.clone()
    }

    /// Generates a record and places it at the head of the list.
    ///
    /// A generator error abandons the call with nothing changed.
    pub fn create<G: RecordGenerator + ?Sized>(
        &mut self,
        generator: &mut G,
    ) -> Result<EmailRecord> {
        let record = generator.generate()?;
        self.records.insert(0, record.clone());
        self.persist()?;
        debug!("Created email {} ({})", record.email, record.id);
        Ok(record)
    }

    /// Removes the record with `id`. An unknown id is a no-op.
    pub fn delete(&mut self, id: &str) -> Result<Vec<EmailRecord>> {
        self.records.retain(|r| r.id != id);
        self.persist()?;
        Ok(self.records.clone())
    }

    /// Drops every record and removes the persisted slot entirely.
    pub fn clear(&mut self) -> Result<Vec<EmailRecord>> {
        self.records.clear();
        if let Err(e) = self.backend.remove(RECORDS_SLOT) {
            warn!("Failed to remove email list: {}", e);
            return Err(e);
        }
        Ok(Vec::new())
    }

    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&EmailRecord> {
        self.records.first()
    }

    pub fn find(&self, id: &str) -> Option<&EmailRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn slot_path(&self) -> PathBuf {
        self.backend.slot_path(RECORDS_SLOT)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn discard(&self, reason: &dyn std::fmt::Display) -> Vec<EmailRecord> {
        warn!("Discarding unreadable email list: {}", reason);
        if let Err(e) = self.backend.remove(RECORDS_SLOT) {
            warn!("Failed to remove unreadable email list: {}", e);
        }
        Vec::new()
    }

    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.backend.write(RECORDS_SLOT, &blob).map_err(|e| {
            warn!("Failed to save email list: {}", e);
            e
        })
    }
}

/// Case-insensitive substring match on the local part, order preserved.
pub fn filter(records: &[EmailRecord], term: &str) -> Vec<EmailRecord> {
    if term.is_empty() {
        return records.to_vec();
    }
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|r| matches_lowercase(r, &term))
        .cloned()
        .collect()
}

/// The match `filter` applies, for a `term` that is already lowercase.
pub fn matches_lowercase(record: &EmailRecord, term: &str) -> bool {
    record.email.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MailzError;
    use crate::store::mem_backend::MemBackend;

    /// Hands out records with increasing timestamps.
    fn sequence(emails: &'static [&'static str]) -> impl FnMut() -> Result<EmailRecord> {
        let mut n = 0;
        move || {
            let email = emails[n % emails.len()];
            n += 1;
            Ok(EmailRecord::new(email, 1_000 + n as i64))
        }
    }

    fn reloaded(backend: &MemBackend) -> Vec<EmailRecord> {
        RecordStore::open(backend).records().to_vec()
    }

    #[test]
    fn opens_empty_without_data() {
        let backend = MemBackend::new();
        let store = RecordStore::open(&backend);
        assert!(store.records().is_empty());
        assert!(store.latest().is_none());
    }

    #[test]
    fn create_prepends_and_keeps_order() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        let mut next = sequence(&["first", "second", "third"]);

        store.create(&mut next).unwrap();
        store.create(&mut next).unwrap();
        let third = store.create(&mut next).unwrap();

        let emails: Vec<_> = store.records().iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["third", "second", "first"]);
        assert_eq!(store.latest(), Some(&third));
    }

    #[test]
    fn memory_matches_storage_after_every_mutation() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        let mut next = sequence(&["alpha", "beta", "gamma"]);

        store.create(&mut next).unwrap();
        assert_eq!(store.records(), reloaded(&backend).as_slice());

        let beta = store.create(&mut next).unwrap();
        store.create(&mut next).unwrap();
        assert_eq!(store.records(), reloaded(&backend).as_slice());

        store.delete(&beta.id).unwrap();
        assert_eq!(store.records(), reloaded(&backend).as_slice());

        store.clear().unwrap();
        assert_eq!(store.records(), reloaded(&backend).as_slice());
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        let mut next = sequence(&["one", "two", "three"]);
        store.create(&mut next).unwrap();
        let two = store.create(&mut next).unwrap();
        store.create(&mut next).unwrap();

        let remaining = store.delete(&two.id).unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|r| r.id != two.id));
        assert_eq!(remaining[0].email, "three");
        assert_eq!(remaining[1].email, "one");
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        store.create(&mut sequence(&["only"])).unwrap();
        let before = store.records().to_vec();

        let after = store.delete("does-not-exist").unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn clear_removes_the_slot() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        store.create(&mut sequence(&["x"])).unwrap();
        assert!(backend.contains(RECORDS_SLOT));

        assert!(store.clear().unwrap().is_empty());
        assert!(!backend.contains(RECORDS_SLOT));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty_and_is_removed() {
        let backend = MemBackend::new();
        backend.put_raw(RECORDS_SLOT, "[{\"id\": \"1\", \"email\":");

        let mut store = RecordStore::open(&backend);
        assert!(store.records().is_empty());
        assert!(!backend.contains(RECORDS_SLOT));

        // Nothing left to trip over on the next load
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let backend = MemBackend::new();
        backend.put_raw(RECORDS_SLOT, r#"{"id":"1","email":"a","createdAt":1}"#);

        let store = RecordStore::open(&backend);
        assert!(store.records().is_empty());
        assert!(!backend.contains(RECORDS_SLOT));
    }

    #[test]
    fn loads_records_written_by_the_browser_layout() {
        let backend = MemBackend::new();
        backend.put_raw(
            RECORDS_SLOT,
            r#"[{"id":"2","email":"megaq1w2e","createdAt":2},{"id":"1","email":"coolabc12","createdAt":1}]"#,
        );

        let store = RecordStore::open(&backend);
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].email, "megaq1w2e");
        assert_eq!(store.find("1").map(|r| r.email.as_str()), Some("coolabc12"));
    }

    #[test]
    fn generator_failure_leaves_state_untouched() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        store.create(&mut sequence(&["kept"])).unwrap();

        let mut failing = || -> Result<EmailRecord> {
            Err(MailzError::Generation("word service down".into()))
        };
        let err = store.create(&mut failing).unwrap_err();
        assert!(matches!(err, MailzError::Generation(_)));
        assert_eq!(store.records().len(), 1);
        assert_eq!(reloaded(&backend).len(), 1);
    }

    #[test]
    fn write_failure_keeps_memory_state() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        store.create(&mut sequence(&["saved"])).unwrap();

        backend.set_simulate_write_error(true);
        let mut unsaved = || -> Result<EmailRecord> { Ok(EmailRecord::new("unsaved", 5_000)) };
        assert!(store.create(&mut unsaved).is_err());

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].email, "unsaved");
        assert_eq!(reloaded(&backend).len(), 1);

        // Next successful write catches storage up
        backend.set_simulate_write_error(false);
        store.delete("no-such-id").unwrap();
        assert_eq!(reloaded(&backend).len(), 2);
    }

    #[test]
    fn filter_with_empty_term_returns_input() {
        let records = vec![EmailRecord::new("b", 2), EmailRecord::new("a", 1)];
        assert_eq!(filter(&records, ""), records);
    }

    #[test]
    fn filter_is_case_insensitive_and_ordered() {
        let records = vec![
            EmailRecord::new("coolzz999", 3),
            EmailRecord::new("ninja00001", 2),
            EmailRecord::new("coolabc12", 1),
        ];
        let hits = filter(&records, "COOL");
        let emails: Vec<_> = hits.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["coolzz999", "coolabc12"]);
        assert!(filter(&records, "pixel").is_empty());
    }

    #[test]
    fn end_to_end_create_filter_clear() {
        let backend = MemBackend::new();
        let mut store = RecordStore::open(&backend);
        let mut next = sequence(&["swiftk3j4h", "primeq9w8e"]);

        let first = store.create(&mut next).unwrap();
        let second = store.create(&mut next).unwrap();
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0], second);

        let hits = filter(store.records(), "k3j4");
        assert_eq!(hits, vec![first]);

        store.clear().unwrap();
        assert!(store.records().is_empty());
        assert!(!backend.contains(RECORDS_SLOT));
    }
}
