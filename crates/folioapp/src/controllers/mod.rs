//! # Controllers
//!
//! The stateful half of folio. Each controller is the single writer of one
//! piece of UI state and broadcasts every change to its subscribers
//! synchronously, before the mutating call returns.
//!
//! | Controller | Owns | Changes on |
//! |------------|------|------------|
//! | [`FilterStateController`] | [`FilterState`], [`QueryMode`], derived view | search/filter input, chip clicks |
//! | [`ThemeController`] | [`ThemeState`] | `toggle()` |
//! | [`ScrollVisibilityController`] | per-element revealed flags | throttled layout ticks |
//!
//! The three are independent: none of them reads another's state. Wiring
//! them together (and to analytics) is the job of [`crate::api::FolioApi`].
//!
//! [`FilterState`]: crate::model::FilterState
//! [`QueryMode`]: crate::model::QueryMode
//! [`ThemeState`]: crate::model::ThemeState

pub mod filter;
pub mod theme;
pub mod visibility;

pub use filter::FilterStateController;
pub use theme::{ThemeController, DEFAULT_THEME_KEY};
pub use visibility::{
    LayoutProbe, ScrollVisibilityController, TickOutcome, VisibilityChange, VisibilityOptions,
};
