use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::AnkipixError;

const APP_NAME: &str = "ankipix";

/// Platform config dir for this app, created on first use.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        let app_dir = dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// Platform data dir for this app (log files live here), created on first use.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = dirs::data_local_dir() {
        let app_dir = dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn config_file_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), AnkipixError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// A missing file loads as `T::default()`.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, AnkipixError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
