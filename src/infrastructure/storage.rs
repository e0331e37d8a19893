use std::fs;
use std::path::{Path, PathBuf};

use crate::infrastructure::config::Settings;

pub fn resolve_data_dir(settings: &Settings) -> std::io::Result<PathBuf> {
    ensure_dir(&settings.data_dir)?;
    Ok(settings.data_dir.clone())
}

pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join("preferences.json")
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
