//! StateStore - Local Grid State Persistence
//!
//! Hosts receive the declarative grid state on every change so column
//! layouts can be persisted and restored across sessions; this module
//! stores that shape as JSON in the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::state::GridState;

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "full-grid")
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a persisted grid state; a missing file yields the default
pub fn load_state(filename: &str) -> Result<GridState> {
    load_state_from(&app_data_dir()?, filename)
}

/// Save a grid state as pretty JSON
pub fn save_state(filename: &str, state: &GridState) -> Result<()> {
    save_state_in(&app_data_dir()?, filename, state)
}

/// Delete a persisted grid state
pub fn delete_state(filename: &str) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// List all persisted grid state files
pub fn list_states() -> Result<Vec<String>> {
    let dir = app_data_dir()?;
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            if let Some(name) = path.file_name() {
                files.push(name.to_string_lossy().to_string());
            }
        }
    }

    Ok(files)
}

fn load_state_from(dir: &Path, filename: &str) -> Result<GridState> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(GridState::default());
    }

    let content = fs::read_to_string(&path)?;
    let state: GridState = serde_json::from_str(&content)?;
    Ok(state)
}

fn save_state_in(dir: &Path, filename: &str, state: &GridState) -> Result<()> {
    let content = serde_json::to_string_pretty(state)?;
    fs::write(dir.join(filename), content)?;
    Ok(())
}
