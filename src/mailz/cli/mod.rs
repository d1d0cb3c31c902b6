//! # CLI Behavior
//!
//! This is **one possible UI client** for mailz, not the application itself.
//! For the overall architecture, see the library docs in `mailz`.
//!
//! ## Naked Execution (`mailz`)
//!
//! Running `mailz` with no arguments defaults to `mailz list`.
//!
//! ## Generate (`mailz new`)
//!
//! Creates an address, copies `local@domain` to the clipboard and opens the
//! inbox viewer for it. `--no-copy` and `--no-open` turn the side effects off
//! for one call; `copy-on-create` / `open-on-create` turn them off for good.
//! Clipboard or browser failures are reported as warnings, the address is
//! still saved.
//!
//! ## Addressing Records
//!
//! `1` is always the newest address. Indexes shown by `list --search` are the
//! same as in the full list, so `mailz search ninja` followed by
//! `mailz open 3` opens what the search showed as `3`. Ids (the long numbers
//! in the listing) work wherever an index does.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `print`: Output formatting (record table, colored messages)
//! - `setup`: Argument parsing via clap, grouped help text

mod commands;
mod print;
pub mod setup;

pub use commands::run;
