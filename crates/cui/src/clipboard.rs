use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Hands `text` to the first platform clipboard tool that accepts it.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;
    for &(program, args) in CANDIDATES {
        match pipe_into(program, args, text) {
            Ok(()) => {
                tracing::debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(err) => {
                tracing::debug!(program, %err, "clipboard tool failed");
                last_err = Some(err);
            }
        }
    }
    match last_err {
        Some(err) => Err(err.context("no clipboard tool accepted the text")),
        None => bail!("no clipboard tool configured for this platform"),
    }
}

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("cmd", &["/C", "clip"])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

fn pipe_into(program: &str, args: &[&str], input: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("`{program}` not available"))?;
    // The pipe closes when `stdin` drops; the child is reaped even if the write failed.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait().with_context(|| format!("wait for `{program}`"))?;
    written.with_context(|| format!("write to `{program}`"))?;
    if !status.success() {
        bail!("`{program}` exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_error() {
        let err = pipe_into("arcanum-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert!(err.to_string().contains("not available"));
    }

    #[cfg(unix)]
    #[test]
    fn write_failure_is_reported_after_child_exits() {
        // `true` exits without reading, so a payload larger than the pipe buffer breaks the pipe.
        let payload = "x".repeat(1 << 20);
        let err = pipe_into("true", &[], &payload).unwrap_err();
        assert!(err.to_string().contains("write to `true`"));
    }
}
