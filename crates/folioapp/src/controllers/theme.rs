//! Site-wide theme with a persisted preference.
//!
//! Lifecycle:
//!
//! 1. [`ThemeController::init`] reads the stored value once. Missing,
//!    unreadable or unrecognized values all start the session in
//!    [`ThemeState::Default`].
//! 2. [`ThemeController::toggle`] flips the state, persists it, then notifies
//!    subscribers. A failed write is logged and otherwise ignored: the
//!    session keeps the new theme.

use crate::model::ThemeState;
use crate::store::PreferenceBackend;
use crate::subscription::{SubscriptionId, Subscribers};

/// Storage key used when the configuration does not name one.
pub const DEFAULT_THEME_KEY: &str = "theme";

pub struct ThemeController<B: PreferenceBackend> {
    backend: B,
    key: String,
    current: ThemeState,
    subscribers: Subscribers<dyn FnMut(ThemeState)>,
}

impl<B: PreferenceBackend> ThemeController<B> {
    pub fn init(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match backend.read(&key) {
            Ok(Some(value)) => ThemeState::parse(&value).unwrap_or_else(|| {
                log::warn!(
                    "event=theme_init module=theme status=fallback reason=unrecognized value={:?}",
                    value
                );
                ThemeState::Default
            }),
            Ok(None) => ThemeState::Default,
            Err(e) => {
                log::warn!(
                    "event=theme_init module=theme status=fallback reason=read_error error={}",
                    e
                );
                ThemeState::Default
            }
        };

        log::info!("event=theme_init module=theme theme={}", current);

        Self {
            backend,
            key,
            current,
            subscribers: Subscribers::new(),
        }
    }

    pub fn current(&self) -> ThemeState {
        self.current
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Flips the theme and returns the new state. Always succeeds.
    pub fn toggle(&mut self) -> ThemeState {
        self.current = self.current.toggled();

        if let Err(e) = self.backend.write(&self.key, self.current.as_str()) {
            log::warn!(
                "event=theme_persist module=theme status=error theme={} error={}",
                self.current,
                e
            );
        }

        log::info!("event=theme_toggle module=theme theme={}", self.current);

        let current = self.current;
        for callback in self.subscribers.iter_mut() {
            callback(current);
        }
        current
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(ThemeState) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_init_without_stored_value_is_default() {
        let ctl = ThemeController::init(MemBackend::new(), DEFAULT_THEME_KEY);
        assert_eq!(ctl.current(), ThemeState::Default);
    }

    #[test]
    fn test_init_reads_stored_value() {
        let ctl = ThemeController::init(MemBackend::with_value("theme", "hacker"), "theme");
        assert_eq!(ctl.current(), ThemeState::Hacker);
    }

    #[test]
    fn test_init_with_unrecognized_value_is_default() {
        let ctl = ThemeController::init(MemBackend::with_value("theme", "matrix"), "theme");
        assert_eq!(ctl.current(), ThemeState::Default);
    }

    #[test]
    fn test_init_with_read_error_is_default() {
        let backend = MemBackend::with_value("theme", "hacker");
        backend.set_simulate_read_error(true);
        let ctl = ThemeController::init(backend, "theme");
        assert_eq!(ctl.current(), ThemeState::Default);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut ctl = ThemeController::init(MemBackend::new(), "theme");
        assert_eq!(ctl.toggle(), ThemeState::Hacker);
        assert_eq!(ctl.backend().peek("theme"), Some("hacker".to_string()));

        assert_eq!(ctl.toggle(), ThemeState::Default);
        assert_eq!(ctl.backend().peek("theme"), Some("default".to_string()));
        assert_eq!(ctl.backend().write_count(), 2);
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut ctl = ThemeController::init(backend, "theme");

        assert_eq!(ctl.toggle(), ThemeState::Hacker);
        assert_eq!(ctl.current(), ThemeState::Hacker);
        assert_eq!(ctl.backend().peek("theme"), None);
    }

    #[test]
    fn test_subscribers_notified_with_new_state() {
        let mut ctl = ThemeController::init(MemBackend::new(), "theme");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = ctl.subscribe(move |theme| sink.borrow_mut().push(theme));

        ctl.toggle();
        ctl.toggle();
        assert_eq!(*seen.borrow(), vec![ThemeState::Hacker, ThemeState::Default]);

        assert!(ctl.unsubscribe(id));
        ctl.toggle();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_custom_key_is_used() {
        let mut ctl = ThemeController::init(MemBackend::new(), "site.theme");
        ctl.toggle();
        assert_eq!(ctl.key(), "site.theme");
        assert_eq!(ctl.backend().peek("site.theme"), Some("hacker".to_string()));
        assert_eq!(ctl.backend().peek("theme"), None);
    }
}
