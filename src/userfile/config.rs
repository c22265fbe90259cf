use crate::error::{Result, UserFileError};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

pub const OPERATION_LIST: &str = "list";
pub const OPERATION_ADD: &str = "add";
pub const OPERATION_REMOVE: &str = "remove";
pub const OPERATION_FIND_BY_ID: &str = "findById";

/// Raw named parameters, as collected from the command line.
///
/// Anything not supplied is an empty string; nothing is checked until
/// [`Arguments::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub operation: String,
    pub file_name: String,
    pub item: String,
    pub id: String,
}

/// A validated operation, carrying only the parameters it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List,
    /// `item` is the undecoded JSON record.
    Add { item: String },
    Remove { id: String },
    FindById { id: String },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => OPERATION_LIST,
            Operation::Add { .. } => OPERATION_ADD,
            Operation::Remove { .. } => OPERATION_REMOVE,
            Operation::FindById { .. } => OPERATION_FIND_BY_ID,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything one invocation needs: which file, and what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_name: PathBuf,
    pub operation: Operation,
}

impl Arguments {
    /// Check the parameters and build a [`Config`].
    ///
    /// Checks run in a fixed order: operation present, operation known, file
    /// name present, then the operation's own parameter. The item is not
    /// parsed here and the path is not touched.
    pub fn validate(self) -> Result<Config> {
        if self.operation.is_empty() {
            return Err(UserFileError::MissingParameter("operation"));
        }

        if !matches!(
            self.operation.as_str(),
            OPERATION_LIST | OPERATION_ADD | OPERATION_REMOVE | OPERATION_FIND_BY_ID
        ) {
            return Err(UserFileError::UnknownOperation(self.operation));
        }

        if self.file_name.is_empty() {
            return Err(UserFileError::MissingParameter("fileName"));
        }

        let operation = match self.operation.as_str() {
            OPERATION_ADD => {
                if self.item.is_empty() {
                    return Err(UserFileError::MissingParameter("item"));
                }
                Operation::Add { item: self.item }
            }
            OPERATION_REMOVE | OPERATION_FIND_BY_ID => {
                if self.id.is_empty() {
                    return Err(UserFileError::MissingParameter("id"));
                }
                if self.operation == OPERATION_REMOVE {
                    Operation::Remove { id: self.id }
                } else {
                    Operation::FindById { id: self.id }
                }
            }
            _ => Operation::List,
        };

        debug!(%operation, file = %self.file_name, "validated arguments");

        Ok(Config {
            file_name: PathBuf::from(self.file_name),
            operation,
        })
    }
}
