use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, RecordFile};

/// Hand back the file content untouched. Unlike the other commands this one
/// never creates the file, and never decodes it.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut file = store.open_existing()?;
    let raw = file.read_all()?;
    Ok(CmdResult::default().with_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserFileError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_content_verbatim() {
        let store = InMemoryStore::with_content(r#"[{"id":"1","email":"a@b.c","age":1}]"#);
        let result = run(&store).unwrap();
        assert_eq!(
            result.raw.as_deref(),
            Some(br#"[{"id":"1","email":"a@b.c","age":1}]"#.as_slice())
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn does_not_validate_json() {
        let store = InMemoryStore::with_content("{{ not json");
        let result = run(&store).unwrap();
        assert_eq!(result.raw.as_deref(), Some(b"{{ not json".as_slice()));
    }

    #[test]
    fn fails_on_missing_file_without_creating_it() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store), Err(UserFileError::FileOpen { .. })));
        assert_eq!(store.content(), None);
    }
}
