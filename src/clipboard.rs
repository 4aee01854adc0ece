use anyhow::Result;
use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;

/// Hidden argument that turns the process into a clipboard holder (Linux only).
pub const DAEMON_FLAG: &str = "__clipboard_daemon";

// X11/Wayland clipboards are owned by a live process, so on Linux a detached
// copy of ourselves keeps serving the text after the picker exits.
#[cfg(target_os = "linux")]
fn run_daemon_mode() -> Result<()> {
    let text = std::io::read_to_string(std::io::stdin())?;
    let mut clipboard = Clipboard::new()?;
    // Blocks until another program takes ownership of the clipboard.
    clipboard.set().wait().text(text)?;
    Ok(())
}

/// Runs the clipboard holder if the daemon flag is present.
/// Returns `Ok(true)` if it ran and the process should exit.
pub fn check_and_run_daemon_if_requested() -> Result<bool> {
    if !std::env::args().any(|a| a == DAEMON_FLAG) {
        return Ok(false);
    }
    #[cfg(target_os = "linux")]
    run_daemon_mode()?;
    #[cfg(not(target_os = "linux"))]
    tracing::warn!("{} is only meaningful on Linux, ignoring", DAEMON_FLAG);
    Ok(true)
}

pub fn copy_text_to_clipboard(text: &str) -> Result<()> {
    #[cfg(not(target_os = "linux"))]
    {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
    }

    #[cfg(target_os = "linux")]
    {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let mut child = Command::new(std::env::current_exe()?)
            .arg(DAEMON_FLAG)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .current_dir("/")
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("clipboard helper has no stdin"))?;
        stdin.write_all(text.as_bytes())?;
        stdin.flush()?;
    }
    tracing::debug!("copied {} bytes to the clipboard", text.len());
    Ok(())
}
