//! Storage layer for task-cli
//!
//! The whole task collection lives in a single JSON array file
//! (`tasks.json` in the working directory by default). It is read once at
//! startup and, for mutating commands, replaced wholesale before exit.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::task::TaskList;

/// Default store file name
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

/// Handle on the store file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    pretty: bool,
}

impl Storage {
    /// Open the store at `path`, creating it as an empty array if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let storage = Self {
            path: path.into(),
            pretty: true,
        };
        storage.ensure_initialized()?;
        Ok(storage)
    }

    /// Toggle pretty-printed output for `save`
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "creating empty store file");
        write_atomic(&self.path, b"[]")
    }

    /// Read the whole task collection
    pub fn load(&self) -> Result<TaskList> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "store file is empty");
            return Ok(TaskList::new());
        }
        let tasks: TaskList = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Replace the store file with the full task collection
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let mut json = self.to_json(tasks)?;
        json.push('\n');
        write_atomic(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn to_json<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}

/// Write data atomically using temp file + rename
///
/// The temp file lives in the target's directory so the rename never
/// crosses filesystems. The target is either fully replaced or untouched,
/// and keeps its permissions across the replacement.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let permissions = target_permissions(path)?;
    let mut temp = NamedTempFile::new_in(&parent)?;
    temp.write_all(data)?;
    temp.as_file().set_permissions(permissions)?;
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|err| Error::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    Ok(())
}

/// Permissions the replaced file should end up with.
///
/// A new target is created empty first so it picks up the umask default;
/// the temp file itself is always created owner-only.
fn target_permissions(path: &Path) -> Result<fs::Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let placeholder = File::create(path)?;
            Ok(placeholder.metadata()?.permissions())
        }
        Err(err) => Err(Error::Io(err)),
    }
}
