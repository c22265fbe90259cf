use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, RecordFile};
use tracing::debug;

use super::helpers::{load_users, position_of};

/// Look up a record by id.
///
/// This consumes the file either way: a hit leaves it empty, a miss leaves a
/// single newline in it. Only a hit produces output.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut file = store.open_or_create()?;
    let mut users = load_users(&mut file)?;

    match position_of(&users, id) {
        Some(pos) => {
            let user = users.swap_remove(pos);
            file.truncate()?;
            debug!(id, "found record, file emptied");
            Ok(CmdResult::default().with_found(user))
        }
        None => {
            file.truncate()?;
            file.write_all(b"\n")?;
            debug!(id, "no record, file reset to newline");
            Ok(CmdResult::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserFileError;
    use crate::model::User;
    use crate::store::memory::InMemoryStore;

    const TWO_USERS: &str =
        r#"[{"id":"1","email":"a@x.y","age":10},{"id":"2","email":"b@x.y","age":20}]"#;

    #[test]
    fn hit_returns_record_and_empties_file() {
        let store = InMemoryStore::with_content(TWO_USERS);
        let result = run(&store, "2").unwrap();

        assert_eq!(result.found, Some(User::new("2", "b@x.y", 20)));
        assert!(result.messages.is_empty());
        assert_eq!(store.content(), Some(Vec::new()));
    }

    #[test]
    fn miss_returns_nothing_and_leaves_newline() {
        let store = InMemoryStore::with_content(TWO_USERS);
        let result = run(&store, "3").unwrap();

        assert!(result.is_empty());
        assert_eq!(store.content(), Some(b"\n".to_vec()));
    }

    #[test]
    fn missing_file_is_created_then_reset() {
        let store = InMemoryStore::new();
        let result = run(&store, "1").unwrap();

        assert!(result.is_empty());
        assert_eq!(store.content(), Some(b"\n".to_vec()));
    }

    #[test]
    fn lookup_after_miss_is_decode_error() {
        let store = InMemoryStore::with_content(TWO_USERS);
        run(&store, "3").unwrap();

        assert!(matches!(run(&store, "1"), Err(UserFileError::Decode(_))));
        assert_eq!(store.content(), Some(b"\n".to_vec()));
    }
}
