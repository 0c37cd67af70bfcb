use which::which;

/// Look the scanner up on PATH. A miss is only a warning: the launch itself
/// reports the failure.
pub fn check_scanner(command: &str) -> bool {
    match which(command) {
        Ok(path) => {
            tracing::debug!("Found {}: {:?}", command, path);
            true
        }
        Err(_) => {
            tracing::warn!("Scanner '{}' not found on PATH", command);
            false
        }
    }
}
