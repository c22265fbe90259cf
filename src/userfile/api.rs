//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for running an operation, whatever front end drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** a validated [`Operation`] to its command function
//! - **Returns structured types** (`Result<CmdResult>`)
//! - Hands results to the output sink in [`perform`]
//!
//! ## Generic Over DataStore
//!
//! `UserFileApi<S: DataStore>` is generic over the storage backend:
//! - Production: `UserFileApi<FileStore>`
//! - Testing: `UserFileApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check that each operation reaches the right command and that
//! [`perform`] writes what the command produced. Command logic itself is
//! tested in the command modules.

use crate::commands;
use crate::config::{Config, Operation};
use crate::error::Result;
use crate::output;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::io::Write;
use tracing::debug;

pub struct UserFileApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> UserFileApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add(&self, item: &str) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, item)
    }

    pub fn remove(&self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&self.store, id)
    }

    pub fn find_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn run(&self, operation: &Operation) -> Result<commands::CmdResult> {
        debug!(%operation, "dispatching");
        match operation {
            Operation::List => self.list(),
            Operation::Add { item } => self.add(item),
            Operation::Remove { id } => self.remove(id),
            Operation::FindById { id } => self.find_by_id(id),
        }
    }

    /// Run `operation` and write its result to `out`.
    pub fn perform_with<W: Write>(&self, operation: &Operation, out: &mut W) -> Result<()> {
        let result = self.run(operation)?;
        output::emit(&result, out)
    }
}

/// Run a validated invocation against the file it names.
pub fn perform<W: Write>(config: Config, out: &mut W) -> Result<()> {
    let store = FileStore::new(config.file_name);
    debug!(file = %store.path().display(), operation = %config.operation, "performing");
    let api = UserFileApi::new(store);
    api.perform_with(&config.operation, out)
}
