//! # Storage Layer
//!
//! Generated addresses live in a single named slot of a key/value backend,
//! serialized as one JSON array (newest first):
//!
//! ```text
//! [{"id":"1718000000456","email":"pixelk2j9d","createdAt":1718000000456}, ...]
//! ```
//!
//! Two layers keep the concerns apart:
//!
//! - [`backend::StorageBackend`]: raw slot I/O (read, write, remove a blob).
//!   - [`fs_backend::FsBackend`]: production, one `<slot>.json` file per slot,
//!     written atomically (tmp file + rename).
//!   - [`mem_backend::MemBackend`]: testing, with write-error simulation.
//! - [`record_store::RecordStore`]: the only owner of the records slot.
//!   Handles ordering, corruption recovery and persistence.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── randomEmails.json   # the record list
//! └── config.json         # settings (see config.rs)
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::{filter, matches_lowercase, RecordStore, RECORDS_SLOT};
