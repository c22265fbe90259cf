use crate::commands::{already_exists, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::decode_user;
use crate::store::{DataStore, RecordFile};
use tracing::debug;

use super::helpers::{decode_users, position_of, rewrite_users};

/// Append `item` to the collection unless its id is already taken.
///
/// The item is decoded after the file is opened, so a malformed item still
/// leaves behind a freshly created (empty) file.
pub fn run<S: DataStore>(store: &S, item: &str) -> Result<CmdResult> {
    let mut file = store.open_or_create()?;
    let bytes = file.read_all()?;

    let user = decode_user(item)?;
    let mut users = decode_users(&bytes)?;

    let mut result = CmdResult::default();
    if position_of(&users, &user.id).is_some() {
        debug!(id = %user.id, "duplicate id, leaving file untouched");
        result.add_message(CmdMessage::new(already_exists(&user.id)));
        return Ok(result);
    }

    users.push(user);
    rewrite_users(&mut file, &users)?;
    Ok(result)
}
