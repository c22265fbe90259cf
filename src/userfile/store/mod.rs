//! # Storage Layer
//!
//! Every operation works on one backing file at a time. The [`DataStore`] trait
//! describes how that file is opened; the [`RecordFile`] it hands back is the
//! open handle the command reads from and rewrites.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage on a path.
//!   - `open_existing` fails when the file is missing (used by `list`)
//!   - `open_or_create` creates it with mode `0o644` (every other operation)
//!   - Handles are released on drop, including on early `?` returns
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No filesystem access
//!   - Cloned stores share the same buffer, so tests can inspect it afterwards
//!
//! ## Rewrite Model
//!
//! Mutations are a plain truncate-and-rewrite: [`RecordFile::truncate`] empties
//! the file and rewinds to offset 0, then [`RecordFile::write_all`] lays down the
//! new content. There is no temporary file or rename, so an interrupted rewrite
//! leaves the file truncated.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Opens the backing file of a record collection.
pub trait DataStore {
    type File: RecordFile;

    /// Open read-only. Fails if the file does not exist.
    fn open_existing(&self) -> Result<Self::File>;

    /// Open read-write, creating the file if it does not exist.
    fn open_or_create(&self) -> Result<Self::File>;
}

/// An open handle on the backing file.
pub trait RecordFile {
    /// Read from the current position to the end.
    fn read_all(&mut self) -> Result<Vec<u8>>;

    /// Drop all content and rewind to offset 0.
    fn truncate(&mut self) -> Result<()>;

    /// Write at the current position.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;
}
