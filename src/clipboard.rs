//! Reads text from the system clipboard through the platform's own tools.

use crate::TreesketchError;
use std::io;
use std::process::Command;
#[cfg(feature = "logging")]
use tracing;

const WINDOWS_READ: &str = "$OutputEncoding = [Console]::OutputEncoding = [System.Text.Encoding]::UTF8; Get-Clipboard";

/// Returns the current text content of the clipboard.
///
/// # Errors
///
/// [`TreesketchError::ClipboardUnsupported`] on platforms without a known
/// clipboard tool, [`TreesketchError::Clipboard`] when the tool is missing or fails.
pub fn read_clipboard() -> Result<String, TreesketchError> {
    let os = std::env::consts::OS;
    #[cfg(feature = "logging")]
    tracing::debug!("Reading clipboard on {}", os);
    match os {
        "windows" => require(
            "powershell",
            run_tool("powershell", &["-NoProfile", "-Command", WINDOWS_READ])?,
        ),
        "macos" => require("pbpaste", run_tool("pbpaste", &[])?),
        "linux" | "freebsd" | "openbsd" | "netbsd" => {
            if let Some(text) = run_tool("xclip", &["-selection", "clipboard", "-o"])? {
                return Ok(text);
            }
            if let Some(text) = run_tool("xsel", &["--clipboard", "--output"])? {
                return Ok(text);
            }
            Err(TreesketchError::Clipboard(
                "no clipboard tool found (install xclip or xsel)".to_string(),
            ))
        }
        other => Err(TreesketchError::ClipboardUnsupported(other.to_string())),
    }
}

fn require(program: &str, text: Option<String>) -> Result<String, TreesketchError> {
    text.ok_or_else(|| TreesketchError::Clipboard(format!("{program} not found")))
}

/// Runs a clipboard tool; `Ok(None)` means the tool is not installed.
fn run_tool(program: &str, args: &[&str]) -> Result<Option<String>, TreesketchError> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TreesketchError::Clipboard(format!("{program}: {e}"))),
    };
    if !output.status.success() {
        return Err(TreesketchError::Clipboard(format!(
            "{program} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
}
