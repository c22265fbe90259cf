use crate::error::Result;
use crate::model::{decode_collection, encode_collection, User};
use crate::store::RecordFile;
use tracing::debug;

pub fn load_users<F: RecordFile>(file: &mut F) -> Result<Vec<User>> {
    let bytes = file.read_all()?;
    decode_users(&bytes)
}

pub fn decode_users(bytes: &[u8]) -> Result<Vec<User>> {
    let users = decode_collection(bytes)?;
    debug!(count = users.len(), "decoded collection");
    Ok(users)
}

/// Replace the whole file with the encoded collection.
pub fn rewrite_users<F: RecordFile>(file: &mut F, users: &[User]) -> Result<()> {
    let bytes = encode_collection(users)?;
    file.truncate()?;
    file.write_all(&bytes)?;
    debug!(count = users.len(), bytes = bytes.len(), "rewrote collection");
    Ok(())
}

pub fn position_of(users: &[User], id: &str) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}
