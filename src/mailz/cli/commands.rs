//! # CLI Layer
//!
//! This module is **one possible UI client** for mailz, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::print::{print_entries, print_messages, print_paths, print_records};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, AddressCommands, Cli,
    Commands, CoreCommands, MiscCommands,
};
use clap::Parser;
use directories::ProjectDirs;
use log::debug;
use mailz::api::{CmdResult, ConfigAction, GenerateOptions, MailzApi, MailzPaths};
use mailz::config::MailzConfig;
use mailz::error::{MailzError, Result};
use mailz::generator::GeneratorKind;
use mailz::logging;
use mailz::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Overrides the platform data directory.
const HOME_ENV: &str = "MAILZ_HOME";

struct AppContext {
    api: MailzApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::New {
                no_copy,
                no_open,
                words,
            } => handle_new(&mut ctx, no_copy, no_open, words),
            CoreCommands::List { search } => handle_list(&ctx, search.as_deref()),
            CoreCommands::Search { term } => handle_list(&ctx, Some(&term)),
        },
        Some(Commands::Address(cmd)) => match cmd {
            AddressCommands::Open { selector, no_copy } => {
                handle_open(&ctx, selector.as_deref(), no_copy)
            }
            AddressCommands::Copy { selector } => handle_copy(&ctx, &selector),
            AddressCommands::Delete { selectors } => handle_delete(&mut ctx, &selectors),
            AddressCommands::Clear { yes } => handle_clear(&mut ctx, yes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Paths => handle_paths(&ctx),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
        },
        None => handle_list(&ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "mailz", "mailz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MailzError::Config("Could not determine a data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!("Using data directory {}", data_dir.display());

    let paths = MailzPaths::new(data_dir.clone());
    let config = MailzConfig::load(paths.config_dir())?;
    let api = MailzApi::new(FsBackend::new(data_dir), paths, config);

    Ok(AppContext { api })
}

fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, no_copy: bool, no_open: bool, words: bool) -> Result<()> {
    let configured = GenerateOptions::from_config(ctx.api.settings());
    let options = GenerateOptions {
        kind: words.then_some(GeneratorKind::Words),
        copy: configured.copy && !no_copy,
        open: configured.open && !no_open,
    };
    let result = ctx.api.generate(options)?;
    finish(result)
}

fn handle_list(ctx: &AppContext, search: Option<&str>) -> Result<()> {
    let result = ctx.api.list(search)?;
    print_records(&result.listed_records, ctx.api.inbox());
    finish(result)
}

fn handle_open(ctx: &AppContext, selector: Option<&str>, no_copy: bool) -> Result<()> {
    let result = ctx.api.open(selector, !no_copy)?;
    finish(result)
}

fn handle_copy(ctx: &AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.copy(Some(selector))?;
    finish(result)
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.delete(selectors)?;
    finish(result)
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.record_count();
    let confirmed = yes || count == 0 || confirm(&format!("Delete all {} emails?", count))?;
    let result = ctx.api.clear(confirmed)?;
    finish(result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    print_entries(&result.config_entries);
    finish(result)
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_paths()?;
    print_paths(&result.paths);
    finish(result)
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
    Ok(())
}

/// Asks a yes/no question on stdout; anything but `y`/`yes` is a no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
