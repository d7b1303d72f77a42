//! # Subscriptions
//!
//! Every controller broadcasts its changes through a [`Subscribers`]
//! registry. Consumers register a callback and get back a
//! [`SubscriptionId`] that they use to unsubscribe; there is no ambient
//! global state to reach into.
//!
//! Callbacks run synchronously, in registration order, before the mutating
//! call returns. The registry is generic over the callback type so each
//! controller picks its own signature:
//!
//! ```ignore
//! let mut subs: Subscribers<dyn FnMut(ThemeState)> = Subscribers::new();
//! let id = subs.add(Box::new(|theme| println!("now {theme}")));
//! for callback in subs.iter_mut() {
//!     callback(ThemeState::Hacker);
//! }
//! subs.remove(id);
//! ```

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub struct Subscribers<F: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<F>)>,
}

impl<F: ?Sized> Default for Subscribers<F> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<F: ?Sized> Subscribers<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback. Ids are never reused within one registry.
    pub fn add(&mut self, callback: Box<F>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Removes a callback. Returns false if the id was not registered.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Callbacks in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut F> + '_ {
        self.entries.iter_mut().map(|(_, callback)| callback.as_mut())
    }
}

impl<F: ?Sized> fmt::Debug for Subscribers<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
