//! The output sink.
//!
//! Results are written exactly as produced: raw file bytes, a compact JSON
//! record, or status text. No separators or trailing newline are added.

use crate::commands::CmdResult;
use crate::error::{Result, UserFileError};
use crate::model::encode_user;
use std::io::Write;
use tracing::debug;

pub fn emit<W: Write>(result: &CmdResult, out: &mut W) -> Result<()> {
    if result.is_empty() {
        debug!("nothing to write");
        return Ok(());
    }
    if let Some(raw) = &result.raw {
        out.write_all(raw).map_err(UserFileError::Output)?;
    }
    if let Some(user) = &result.found {
        let bytes = encode_user(user)?;
        out.write_all(&bytes).map_err(UserFileError::Output)?;
    }
    for message in &result.messages {
        out.write_all(message.content.as_bytes())
            .map_err(UserFileError::Output)?;
    }
    out.flush().map_err(UserFileError::Output)
}
