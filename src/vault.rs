//! File references and the storage they are read from.
//!
//! The publish operation never touches the filesystem directly; it reads
//! through a [`Vault`] so any host storage can sit behind it.

use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// A file selected by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    name: String,
    path: PathBuf,
}

impl FileRef {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Resolve a path given on the command line.
    ///
    /// Returns `Ok(None)` when `path` cannot be resolved to anything (missing,
    /// a parent that is not a directory, unreadable), so the caller reports it
    /// as a missing file. Directories are refused outright: only files can be
    /// pushed.
    pub fn resolve(path: &Path) -> Result<Option<Self>> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Cannot resolve {:?}: {}", path, e);
                return Ok(None);
            }
        };

        if metadata.is_dir() {
            bail!("{:?} is a directory, only files can be synced", path);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Path has no file name: {:?}", path))?;

        Ok(Some(Self::new(name, path)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Asynchronous read access to the host's file storage.
pub trait Vault {
    fn read(&self, file: &FileRef) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

/// Reads files straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsVault;

impl Vault for FsVault {
    async fn read(&self, file: &FileRef) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(file.path()).await
    }
}
