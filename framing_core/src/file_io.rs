//! # File I/O Module
//!
//! Persists a [`HouseStore`] with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent two processes editing the same store
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Stores are pretty-printed JSON. Lock files sit next to the store with a
//! `.lock` suffix (`houses.json.lock`) and record who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use framing_core::file_io::{load_or_default, save_store, FileLock};
//! use std::path::Path;
//!
//! let path = Path::new("houses.json");
//! let lock = FileLock::acquire(path, "gerald")?;
//!
//! let mut store = load_or_default(path)?;
//! store.create("Cabin", 30.0, 10.0)?;
//! save_store(&store, path)?;
//!
//! drop(lock);
//! # Ok::<(), framing_core::errors::FramingError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{FramingError, FramingResult};
use crate::houses::{HouseStore, SCHEMA_VERSION};

/// Lock file metadata stored in .lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. A .lock file with metadata so users can see who holds it
pub struct FileLock {
    store_path: PathBuf,
    lock_path: PathBuf,
    /// Keeps the OS lock alive
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a store file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired
    /// * `Err(FramingError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> FramingResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(FramingError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                warn!(
                    path = %path.display(),
                    holder = %existing.user_id,
                    pid = existing.pid,
                    "taking over stale lock"
                );
            }
        }

        // Not truncated until the OS lock is ours
        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                FramingError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            FramingError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(FramingError::serialization)?;

        lock_file
            .set_len(0)
            .and_then(|_| lock_file.write_all(lock_json.as_bytes()))
            .and_then(|_| lock_file.sync_all())
            .map_err(|e| {
                FramingError::file_error("write lock", lock_path.display().to_string(), e.to_string())
            })?;

        Ok(FileLock {
            store_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a store is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Path of the locked store file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // OS lock goes with _lock_file
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(store_path: &Path) -> PathBuf {
    let mut lock_path = store_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> FramingResult<LockInfo> {
    let contents = read_to_string(lock_path, "read lock")?;
    serde_json::from_str(&contents).map_err(FramingError::serialization)
}

/// A lock is stale when its process is gone or it is older than 24 hours.
///
/// The dead-process check runs on Windows (`tasklist`) and Linux (`/proc`)
/// only; other platforms rely on the 24 hour age limit alone.
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
            #[cfg(target_os = "linux")]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
        }
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

fn read_to_string(path: &Path, operation: &str) -> FramingResult<String> {
    let mut file = File::open(path)
        .map_err(|e| FramingError::file_error(operation, path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| FramingError::file_error(operation, path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a store with atomic write semantics.
///
/// 1. Serialize to JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk
/// 4. Rename over the target
pub fn save_store(store: &HouseStore, path: &Path) -> FramingResult<()> {
    let json = serde_json::to_string_pretty(store).map_err(FramingError::serialization)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FramingError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        FramingError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        FramingError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FramingError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), houses = store.len(), "saved house store");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = tmp_path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

/// Load a store from a file.
///
/// # Returns
///
/// * `Ok(HouseStore)` - Successfully loaded
/// * `Err(FramingError::VersionMismatch)` - File version is incompatible
/// * `Err(FramingError::SerializationError)` - Invalid JSON
/// * `Err(FramingError::FileError)` - I/O error
pub fn load_store(path: &Path) -> FramingResult<HouseStore> {
    let contents = read_to_string(path, "read")?;

    let store: HouseStore = serde_json::from_str(&contents).map_err(|e| FramingError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&store.version)?;

    for record in store.list() {
        record.dimensions()?;
    }

    info!(path = %path.display(), houses = store.len(), "loaded house store");
    Ok(store)
}

/// Load a store, or start an empty one if the file does not exist yet.
pub fn load_or_default(path: &Path) -> FramingResult<HouseStore> {
    if path.exists() {
        load_store(path)
    } else {
        Ok(HouseStore::new())
    }
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> FramingResult<()> {
    let mismatch = || FramingError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor version may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
