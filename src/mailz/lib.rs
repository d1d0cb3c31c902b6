//! # Mailz Architecture
//!
//! Mailz hands out **throwaway inbox addresses**. Each generated address is a
//! local part (e.g. `ninja4k2zq`) on a public disposable-mail domain; the
//! inbox itself lives on an external viewer site that mailz only links to.
//!
//! Like any small tool that may grow a second front end, the core is a library
//! and the CLI is one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the generator/clipboard/browser       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore over a StorageBackend slot                   │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and Indexes
//!
//! Records are kept newest first. Users address them by their 1-based
//! position in that list (`mailz open 2`) or by id; see [`index`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. The outside world (random words service, clipboard,
//! browser) is reached through traits so tests can swap it out.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Slot storage and the record store
//! - [`model`]: `EmailRecord` and the session clock
//! - [`index`]: Display indexes and record selectors
//! - [`generator`]: Local part generators
//! - [`inbox`]: Address formatting and the browser navigator
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`config`]: Configuration management
//! - [`logging`]: Logger setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod inbox;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
