//! Advisory lock that keeps two wizard sessions off the same install directory.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub const LOCK_FILENAME: &str = ".env.lock";

#[derive(Debug, Serialize, Deserialize)]
pub struct LockMetadata {
    pub pid: u32,
    pub started_at: String,
    pub command: String,
}

/// Held for the lifetime of a session; released on drop.
#[derive(Debug)]
pub struct SessionLock {
    file: File,
    lock_path: PathBuf,
}

impl SessionLock {
    pub fn acquire(install_dir: &Path, command: &str) -> Result<Self, AppError> {
        let lock_path = install_dir.join(LOCK_FILENAME);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        if let Err(err) = file.try_lock_exclusive() {
            if err.kind() == io::ErrorKind::WouldBlock
                || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
            {
                return Err(AppError::SessionLocked {
                    holder: describe_holder(&lock_path),
                    lock_path,
                });
            }
            return Err(err.into());
        }

        let lock = Self { file, lock_path };
        lock.write_metadata(command)?;
        tracing::debug!(path = %lock.lock_path.display(), "acquired session lock");
        Ok(lock)
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    fn write_metadata(&self, command: &str) -> Result<(), AppError> {
        let metadata = LockMetadata {
            pid: std::process::id(),
            started_at: chrono::Utc::now().to_rfc3339(),
            command: command.to_string(),
        };
        let json = serde_json::to_string_pretty(&metadata).map_err(io::Error::other)?;

        let mut file = &self.file;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn describe_holder(lock_path: &Path) -> String {
    let mut contents = String::new();
    let read = File::open(lock_path).and_then(|mut f| f.read_to_string(&mut contents));
    match read.ok().and_then(|_| serde_json::from_str::<LockMetadata>(&contents).ok()) {
        Some(meta) => format!("{} with PID {}, started {}", meta.command, meta.pid, meta.started_at),
        None => "unknown process".to_string(),
    }
}
