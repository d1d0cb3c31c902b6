//! # Mailz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/mailz/cli/)                                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal output (print.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  mailz::api::MailzApi (library)
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns all
//! user-facing concerns: parsing, logger setup, confirmation prompts,
//! rendering and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
