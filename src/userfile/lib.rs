//! # Userfile Architecture
//!
//! Userfile keeps a list of user records (`id`, `email`, `age`) in one JSON
//! file and offers four operations on it: `list`, `add`, `remove` and
//! `findById`. Each invocation opens the file, reads all of it, and for
//! mutations rewrites all of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Resolves flags into `Arguments`, sets up logging         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config (config.rs)                                         │
//! │  - Validates `Arguments` into a typed `Config`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Output Sink (output.rs)               │
//! │  - Dispatches an `Operation`, writes the `CmdResult`        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Read / decode / mutate / encode / rewrite                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` + `RecordFile` traits                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Quirks
//!
//! `findById` consumes the file: after a hit the file is empty, after a miss
//! it holds a single newline, which no later operation can decode. `list`
//! refuses a missing file while every other operation creates it. Both are kept as observable behavior.
//!
//! Nothing guards against two processes touching the same file at once, and a
//! rewrite interrupted after truncation leaves the file truncated.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`config`]: Parameter validation and the typed `Config`
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `User` record and collection encoding
//! - [`output`]: Writes results to the output sink
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod store;
