//! # Query Engine
//!
//! Pure functions over a slice of [`ContentRecord`]s. Nothing here owns data
//! or keeps state; every function borrows the records and returns a new
//! vector of references in the original relative order.
//!
//! ## Two Query Semantics
//!
//! The site exposes two ways of narrowing the project list, and they do not
//! agree on what a "category" is:
//!
//! | Function | Surface | Combination |
//! |----------|---------|-------------|
//! | [`search`] | search panel | AND across term, category and technology |
//! | [`chip_filter`] | one-click chips | OR across key, technology tags and category |
//!
//! They are kept as two named functions rather than one function with a
//! mode flag so that neither call site can drift into the other's rules.
//!
//! ## Permissive Inputs
//!
//! Unknown category or technology values are not errors: they simply match
//! nothing. An empty result is a valid outcome and the caller decides what to
//! show instead.
//!
//! ## Helpers
//!
//! - [`categories`] / [`technologies`]: observed values for building filter menus
//! - [`group_by_category`]: ordered sections for the grouped project view
//! - [`sort_by_title`]: stable alphabetical ordering
//!
//! [`ContentRecord`]: crate::model::ContentRecord

mod chip;
mod facets;
mod search;

pub use chip::{chip_filter, chip_matches};
pub use facets::{categories, group_by_category, sort_by_title, technologies};
pub use search::{search, search_matches};
