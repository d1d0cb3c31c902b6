use crate::error::{MailzError, Result};
use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

/// Anything that can put text on a clipboard.
pub trait ClipboardWriter {
    fn copy(&self, text: &str) -> Result<()>;
}

/// The system clipboard, driven through the platform's copy tool.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

type Tool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[Tool] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_TOOLS: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[Tool] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_TOOLS: &[Tool] = &[];

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy, then xclip, then xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if CLIPBOARD_TOOLS.is_empty() {
        return Err(MailzError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ));
    }
    pipe_to(CLIPBOARD_TOOLS, text)
}

/// Spawns the first tool that starts and writes `text` to its stdin.
fn pipe_to(tools: &[Tool], text: &str) -> Result<()> {
    let mut spawn_errors = Vec::new();

    for (program, args) in tools {
        let mut child = match Command::new(program)
            .args(args.iter())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!("Clipboard tool {} unavailable: {}", program, e);
                spawn_errors.push(format!("{}: {}", program, e));
                continue;
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                MailzError::Clipboard(format!("Failed to write to {}: {}", program, e))
            })?;
        }

        let status = child.wait().map_err(|e| {
            MailzError::Clipboard(format!("Failed to wait for {}: {}", program, e))
        })?;

        return if status.success() {
            Ok(())
        } else {
            Err(MailzError::Clipboard(format!("{} exited with error", program)))
        };
    }

    Err(MailzError::Clipboard(format!(
        "No clipboard tool found ({})",
        spawn_errors.join(", ")
    )))
}
