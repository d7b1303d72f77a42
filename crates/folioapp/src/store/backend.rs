use crate::error::Result;

/// Abstract interface for persisted preferences.
///
/// All methods take `&self`; implementations that need mutation use interior
/// mutability. folio is single-threaded, so no `Send`/`Sync` bound.
pub trait PreferenceBackend {
    /// Read a stored value. `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
