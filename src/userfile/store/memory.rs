use super::{DataStore, RecordFile};
use crate::error::{Result, UserFileError};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory storage for testing.
/// Does NOT persist data. Clones share one buffer; `None` means the file does not exist.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Rc<RefCell<Option<Vec<u8>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Rc::new(RefCell::new(Some(content.into()))),
        }
    }

    /// Current file content, `None` if the file was never created.
    pub fn content(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }
}

impl DataStore for InMemoryStore {
    type File = MemoryFile;

    fn open_existing(&self) -> Result<MemoryFile> {
        if self.data.borrow().is_none() {
            return Err(UserFileError::FileOpen {
                path: PathBuf::from(":memory:"),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        Ok(MemoryFile {
            data: Rc::clone(&self.data),
            pos: 0,
            writable: false,
        })
    }

    fn open_or_create(&self) -> Result<MemoryFile> {
        self.data.borrow_mut().get_or_insert_with(Vec::new);
        Ok(MemoryFile {
            data: Rc::clone(&self.data),
            pos: 0,
            writable: true,
        })
    }
}

pub struct MemoryFile {
    data: Rc<RefCell<Option<Vec<u8>>>>,
    pos: usize,
    writable: bool,
}

impl MemoryFile {
    fn check_writable(&self) -> Result<()> {
        if self.writable {
            Ok(())
        } else {
            Err(UserFileError::FileWrite(io::Error::from(
                io::ErrorKind::PermissionDenied,
            )))
        }
    }
}

impl RecordFile for MemoryFile {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        let data = self.data.borrow();
        let bytes = data.as_deref().unwrap_or_default();
        let start = self.pos.min(bytes.len());
        let rest = bytes[start..].to_vec();
        self.pos = bytes.len();
        Ok(rest)
    }

    fn truncate(&mut self) -> Result<()> {
        self.check_writable()?;
        *self.data.borrow_mut() = Some(Vec::new());
        self.pos = 0;
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_writable()?;
        let mut data = self.data.borrow_mut();
        let buf = data.get_or_insert_with(Vec::new);
        let end = self.pos + bytes.len();
        if buf.len() < end {
            buf.resize(end, 0);
        }
        buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_until_created() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.open_existing(),
            Err(UserFileError::FileOpen { .. })
        ));
        assert_eq!(store.content(), None);

        drop(store.open_or_create().unwrap());
        assert_eq!(store.content(), Some(Vec::new()));
    }

    #[test]
    fn test_clones_share_buffer() {
        let store = InMemoryStore::with_content("old");
        let shared = store.clone();

        let mut file = store.open_or_create().unwrap();
        assert_eq!(file.read_all().unwrap(), b"old");
        file.truncate().unwrap();
        file.write_all(b"new!").unwrap();

        assert_eq!(shared.content(), Some(b"new!".to_vec()));
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let store = InMemoryStore::with_content("abcdef");
        let mut file = store.open_or_create().unwrap();
        file.write_all(b"XY").unwrap();
        assert_eq!(store.content(), Some(b"XYcdef".to_vec()));
    }

    #[test]
    fn test_read_only_file_rejects_mutation() {
        let store = InMemoryStore::with_content("[]");
        let mut file = store.open_existing().unwrap();
        assert!(matches!(file.truncate(), Err(UserFileError::FileWrite(_))));
        assert!(matches!(file.write_all(b"x"), Err(UserFileError::FileWrite(_))));
        assert_eq!(store.content(), Some(b"[]".to_vec()));
    }
}
