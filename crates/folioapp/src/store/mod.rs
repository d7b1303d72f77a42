//! # Preference Storage
//!
//! Client-local persistence for UI preferences. Today that is a single entry,
//! the theme, but the store is a plain string key/value map so new
//! preferences need no schema change.
//!
//! ## Contract
//!
//! - **Absence is normal**: reading a key that was never written is `Ok(None)`.
//! - **Failure is not fatal**: callers (the theme controller) log and carry
//!   on with in-memory state when a backend returns an error.
//! - **Writes are atomic**: the filesystem backend writes a temp file and
//!   renames it over the target, so a crash never leaves half a file.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: `preferences.json` under a storage directory.
//! - [`mem_backend::MemBackend`]: in-memory map with failure injection, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <storage_dir>/
//! └── preferences.json    # {"theme": "hacker"}
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::PreferenceBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
