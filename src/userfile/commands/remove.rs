use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecordFile};
use tracing::debug;

use super::helpers::{load_users, position_of, rewrite_users};

/// Drop the first record with `id`, keeping the order of the rest.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut file = store.open_or_create()?;
    let mut users = load_users(&mut file)?;

    let mut result = CmdResult::default();
    match position_of(&users, id) {
        Some(pos) => {
            users.remove(pos);
            rewrite_users(&mut file, &users)?;
            debug!(id, pos, "removed record");
        }
        None => result.add_message(CmdMessage::new(not_found(id))),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{decode_collection, User};
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let store = InMemoryStore::new();
        add::run(&store, r#"{"id":"1","email":"a@x.y","age":1}"#).unwrap();
        add::run(&store, r#"{"id":"2","email":"b@x.y","age":2}"#).unwrap();
        add::run(&store, r#"{"id":"3","email":"c@x.y","age":3}"#).unwrap();
        store
    }

    #[test]
    fn removes_and_preserves_order() {
        let store = seeded();
        let result = run(&store, "2").unwrap();

        assert!(result.is_empty());
        let users = decode_collection(&store.content().unwrap()).unwrap();
        assert_eq!(
            users,
            vec![User::new("1", "a@x.y", 1), User::new("3", "c@x.y", 3)]
        );
    }

    #[test]
    fn removes_only_first_match() {
        let store = InMemoryStore::with_content(
            r#"[{"id":"1","email":"a","age":1},{"id":"1","email":"b","age":2}]"#,
        );
        run(&store, "1").unwrap();
        let users = decode_collection(&store.content().unwrap()).unwrap();
        assert_eq!(users, vec![User::new("1", "b", 2)]);
    }

    #[test]
    fn missing_id_reports_and_keeps_bytes() {
        let store = seeded();
        let before = store.content().unwrap();

        let result = run(&store, "42").unwrap();

        assert_eq!(result.messages, vec![CmdMessage::new("Item with id 42 not found")]);
        assert_eq!(store.content().unwrap(), before);
    }

    #[test]
    fn removing_last_record_leaves_empty_array() {
        let store = InMemoryStore::with_content(r#"[{"id":"1","email":"a","age":1}]"#);
        run(&store, "1").unwrap();
        assert_eq!(store.content().unwrap(), b"[]");
    }

    #[test]
    fn creates_missing_file() {
        let store = InMemoryStore::new();
        let result = run(&store, "1").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(store.content(), Some(Vec::new()));
    }
}
