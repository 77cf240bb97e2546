use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the myday directory - checks for a local .myday first, then falls back to global ~/.myday
pub fn get_myday_dir() -> Result<PathBuf> {
    // Check for local .myday directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_myday(&current_dir) {
        return Ok(local_dir);
    }

    // Fall back to global ~/.myday
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".myday"))
}

/// Find a local .myday directory by walking up the directory tree
fn find_local_myday(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let myday_dir = current.join(".myday");
        if myday_dir.exists() && myday_dir.is_dir() {
            return Some(myday_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the myday directory exists
pub fn ensure_myday_dir() -> Result<PathBuf> {
    let dir = get_myday_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .myday directory in the current directory
pub fn init_local_myday() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let myday_dir = current_dir.join(".myday");

    if myday_dir.exists() {
        anyhow::bail!("Storage directory already exists: {}", myday_dir.display());
    }

    fs::create_dir_all(&myday_dir)
        .with_context(|| format!("Failed to create directory: {}", myday_dir.display()))?;

    Ok(myday_dir)
}

/// Path of the single storage slot holding the whole task collection
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_myday_dir()?.join("tasks.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
