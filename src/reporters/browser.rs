use std::path::Path;
use std::process::{Command, Stdio};

/// Hand the report to the desktop's default handler without waiting for it.
/// Any failure is logged and swallowed.
pub fn open_report(path: &Path, opener: Option<&str>) {
    let mut cmd = match opener {
        Some(program) => {
            let mut cmd = Command::new(program);
            cmd.arg(path);
            cmd
        }
        None => default_opener(path),
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match cmd.spawn() {
        Ok(child) => tracing::debug!("Opened {:?} (pid {})", path, child.id()),
        Err(e) => tracing::warn!("Could not open {:?} in a browser: {}", path, e),
    }
}

#[cfg(target_os = "macos")]
fn default_opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn default_opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn default_opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
