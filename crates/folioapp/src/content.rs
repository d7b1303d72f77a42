//! # Content Store
//!
//! Holds the portfolio records, parsed once from a pre-bundled JSON document.
//!
//! ## Load Boundary
//!
//! The document is checked field by field when the store is built, so the
//! rest of the crate never deals with loosely-typed data:
//!
//! 1. **Shape**: a bare list of records, or an object with a `projects` list.
//! 2. **Required fields**: `key` (alias `id`), `title`, `description`,
//!    `category` and `link` must be present. `tech` and `features` default
//!    to empty lists. Unknown fields are ignored.
//! 3. **Title**: must not be blank.
//! 4. **Identity**: keys are unique across the whole store.
//!
//! Any violation is a [`DataLoadError`]; the store is all-or-nothing.
//!
//! ## Sharing
//!
//! A `ContentStore` is a cheap handle (`Rc`) over immutable records, so the
//! filter controller can keep its own copy without owning the data.

use crate::error::DataLoadError;
use crate::model::ContentRecord;
use crate::query;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// The project document compiled into the crate.
pub const BUNDLED_PROJECTS: &str = include_str!("../data/projects.json");

#[derive(Deserialize)]
struct RawRecord {
    #[serde(alias = "id")]
    key: Option<String>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    #[serde(default)]
    tech: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    link: Option<String>,
}

impl RawRecord {
    fn validate(self, index: usize) -> Result<ContentRecord, DataLoadError> {
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or(DataLoadError::MissingField { index, field })
        };

        let key = require(self.key, "key")?;
        let title = require(self.title, "title")?;
        if title.trim().is_empty() {
            return Err(DataLoadError::EmptyTitle { index });
        }

        Ok(ContentRecord {
            key,
            title,
            description: require(self.description, "description")?,
            category: require(self.category, "category")?,
            tech: self.tech,
            features: self.features,
            link: require(self.link, "link")?,
        })
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<ContentRecord>,
    by_key: HashMap<String, usize>,
}

/// Immutable, validated collection of [`ContentRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    inner: Rc<StoreInner>,
}

impl ContentStore {
    /// Parses and validates a content document.
    pub fn load(source: &str) -> Result<Self, DataLoadError> {
        let items = match serde_json::from_str::<Value>(source)? {
            Value::Array(items) => items,
            Value::Object(mut doc) => match doc.remove("projects") {
                Some(Value::Array(items)) => items,
                _ => return Err(DataLoadError::NotAList),
            },
            _ => return Err(DataLoadError::NotAList),
        };

        let mut records = Vec::with_capacity(items.len());
        let mut by_key = HashMap::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let raw: RawRecord = serde_json::from_value(item)?;
            let record = raw.validate(index)?;
            if by_key.insert(record.key.clone(), index).is_some() {
                return Err(DataLoadError::DuplicateKey(record.key));
            }
            records.push(record);
        }

        log::info!(
            "event=content_load module=content status=ok records={}",
            records.len()
        );

        Ok(Self {
            inner: Rc::new(StoreInner { records, by_key }),
        })
    }

    /// Reads a content document from disk and loads it.
    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        let source = fs::read_to_string(path)?;
        Self::load(&source)
    }

    /// Loads the document bundled with the crate.
    pub fn bundled() -> Result<Self, DataLoadError> {
        Self::load(BUNDLED_PROJECTS)
    }

    /// An empty store, used as the fallback view when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.inner.records
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    /// Looks a record up by its identity key.
    pub fn get(&self, key: &str) -> Option<&ContentRecord> {
        self.inner
            .by_key
            .get(key)
            .and_then(|&idx| self.inner.records.get(idx))
    }

    /// Observed categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        query::categories(self.records())
    }

    /// Observed technology tags, in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        query::technologies(self.records())
    }
}
