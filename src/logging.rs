use std::{
    fs,
    io::{
        self,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use tracing_subscriber::EnvFilter;

use crate::{
    core::AnkipixError,
    persistence,
};

const LOG_FILE: &str = "ankipix.log";
const MAX_LOG_BYTES: u64 = 1024 * 1024;
const BACKUP_COUNT: u32 = 5;

/// Rotate `path` once it reaches `max_bytes`: the current file becomes `.1`,
/// existing backups shift up, anything past `backups` is dropped.
pub fn rotate_if_needed(path: &Path, max_bytes: u64, backups: u32) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() >= max_bytes => {}
        _ => return Ok(()),
    }

    let backup = |n: u32| PathBuf::from(format!("{}.{}", path.display(), n));

    let _ = fs::remove_file(backup(backups));
    for n in (1..backups).rev() {
        let from = backup(n);
        if from.exists() {
            fs::rename(&from, backup(n + 1))?;
        }
    }
    fs::rename(path, backup(1))?;
    Ok(())
}

// tracing wants a fresh writer per event; cloning a shared append-mode handle
// keeps every event in the same file.
#[derive(Clone)]
struct SharedFile(Arc<fs::File>);

impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self.0).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self.0).flush()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ankipix=debug"))
}

/// Log to `ankipix.log` in the app data dir, rotating at 1 MiB with up to five
/// backups. Returns Err when the file cannot be opened so the caller can fall
/// back to stderr logging.
pub fn init() -> Result<PathBuf, AnkipixError> {
    let log_path = persistence::data_dir().join(LOG_FILE);
    rotate_if_needed(&log_path, MAX_LOG_BYTES, BACKUP_COUNT)?;

    let file = fs::OpenOptions::new().create(true).append(true).open(&log_path)?;
    let writer = SharedFile(Arc::new(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .init();

    tracing::info!("logging to {}", log_path.display());
    Ok(log_path)
}

/// Stderr-only logging, for when the log file is unavailable.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
