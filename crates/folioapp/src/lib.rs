//! # folioapp
//!
//! The logic layer of a personal portfolio site: project content, the two
//! ways of filtering it, the persisted `default`/`hacker` theme, and the
//! scroll-driven reveal state used to gate entrance animations. Markup,
//! styling and animation curves live in the host; this crate exposes the
//! state they render from.
//!
//! ## Layers
//!
//! | Layer | Modules | Role |
//! |-------|---------|------|
//! | Model | [`model`], [`content`] | Validated, immutable project records |
//! | Query | [`query`] | Pure AND search, OR chip filter, facets |
//! | State | [`controllers`], [`subscription`] | Single-writer state with synchronous broadcast |
//! | Collaborators | [`store`], [`analytics`] | Preference persistence, event sink |
//! | Root | [`api`], [`boundary`], [`config`], [`logging`] | Wiring, error containment, settings |
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous, matching a UI event loop.
//! Subscribers run before the mutating call returns.
//!
//! ## Example
//!
//! ```
//! use folioapp::analytics::MemorySink;
//! use folioapp::api::FolioApi;
//! use folioapp::config::FolioConfig;
//! use folioapp::content::ContentStore;
//! use folioapp::model::ThemeState;
//! use folioapp::store::MemBackend;
//!
//! let mut api = FolioApi::new(
//!     &FolioConfig::default(),
//!     ContentStore::bundled(),
//!     MemBackend::new(),
//!     MemorySink::new(),
//! );
//!
//! api.filters_mut().update_technology("Kotlin");
//! assert!(api.filters().view().iter().all(|p| p.has_tech("Kotlin")));
//!
//! assert_eq!(api.toggle_theme(), ThemeState::Hacker);
//! ```

pub mod analytics;
pub mod api;
pub mod boundary;
pub mod config;
pub mod content;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
pub mod subscription;
