use crate::error::{Result, UserFileError};
use serde::{Deserialize, Serialize};

/// A single user entry. `id` is the key within a collection.
///
/// Decoding is lenient about shape: absent fields fall back to their zero
/// value and unknown fields are ignored. A field of the wrong JSON type is
/// still an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

/// Decode a stored collection.
///
/// Zero-length content and a JSON `null` both mean "no records yet". Anything
/// else must be a JSON array, so a lone newline is a decode error. A `null`
/// element decodes as a zero-valued record.
pub fn decode_collection(bytes: &[u8]) -> Result<Vec<User>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let users: Option<Vec<Option<User>>> =
        serde_json::from_slice(bytes).map_err(UserFileError::Decode)?;
    Ok(users
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

pub fn encode_collection(users: &[User]) -> Result<Vec<u8>> {
    serde_json::to_vec(users).map_err(UserFileError::Encode)
}

/// Decode one record. A JSON `null` gives a zero-valued record.
pub fn decode_user(item: &str) -> Result<User> {
    let user: Option<User> = serde_json::from_str(item).map_err(UserFileError::Decode)?;
    Ok(user.unwrap_or_default())
}

pub fn encode_user(user: &User) -> Result<Vec<u8>> {
    serde_json::to_vec(user).map_err(UserFileError::Encode)
}
