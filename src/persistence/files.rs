use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-project app directory
pub const APP_DIR_NAME: &str = ".tempo";

/// Get the app directory - checks for local .tempo first, then falls back to global ~/.tempo
pub fn get_app_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_app_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(APP_DIR_NAME))
}

/// Find local .tempo directory by walking up the directory tree
fn find_local_app_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let app_dir = current.join(APP_DIR_NAME);
        if app_dir.is_dir() {
            return Some(app_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the app directory exists
pub fn ensure_app_dir() -> Result<PathBuf> {
    let dir = get_app_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tempo directory in the current directory
pub fn init_local_app_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    init_app_dir_in(&current_dir)
}

fn init_app_dir_in(parent: &Path) -> Result<PathBuf> {
    let app_dir = parent.join(APP_DIR_NAME);

    if app_dir.exists() {
        anyhow::bail!("Tempo directory already exists: {}", app_dir.display());
    }

    fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create directory: {}", app_dir.display()))?;

    Ok(app_dir)
}

/// Path to config.json. Resolving it never creates the app directory.
pub fn config_file() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.json"))
}

/// Path to the local key/value storage (holds the session token)
pub fn storage_file() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("storage.json"))
}

/// Path to the log file
pub fn log_file() -> Result<PathBuf> {
    Ok(ensure_app_dir()?.join("tempo.log"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
