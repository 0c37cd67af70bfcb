use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Plain truncating write. A crash mid-write leaves a partial file; the next
/// run regenerates it.
pub fn write_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Invalid path: no parent directory"))?;

    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create parent directory: {:?}", parent))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))?;

    tracing::debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
