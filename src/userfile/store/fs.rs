use super::{DataStore, RecordFile};
use crate::error::{Result, UserFileError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self, options: &OpenOptions) -> Result<FileHandle> {
        let file = options.open(&self.path).map_err(|source| UserFileError::FileOpen {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "opened record file");
        Ok(FileHandle {
            file,
            path: self.path.clone(),
            dirty: false,
        })
    }
}

impl DataStore for FileStore {
    type File = FileHandle;

    fn open_existing(&self) -> Result<FileHandle> {
        self.open(OpenOptions::new().read(true))
    }

    fn open_or_create(&self) -> Result<FileHandle> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        self.open(&options)
    }
}

/// Open record file, released when dropped.
///
/// If anything was written, the data is synced on release. A sync failure is
/// logged and never replaces the result of the operation that used the handle.
pub struct FileHandle {
    file: File,
    path: PathBuf,
    dirty: bool,
}

impl RecordFile for FileHandle {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.file
            .read_to_end(&mut buf)
            .map_err(UserFileError::FileRead)?;
        Ok(buf)
    }

    fn truncate(&mut self) -> Result<()> {
        self.dirty = true;
        self.file.set_len(0).map_err(UserFileError::FileWrite)?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(UserFileError::FileWrite)?;
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.dirty = true;
        self.file.write_all(bytes).map_err(UserFileError::FileWrite)
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.file.sync_all() {
                warn!(path = %self.path.display(), error = %e, "failed to release record file");
            }
        }
        debug!(path = %self.path.display(), "closed record file");
    }
}
