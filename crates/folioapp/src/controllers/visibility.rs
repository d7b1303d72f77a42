//! Scroll-driven reveal state.
//!
//! Tracked elements start unrevealed. On each evaluated tick the controller
//! asks a [`LayoutProbe`] for the viewport height and each element's top
//! edge; an element is in view once its top is above
//! `threshold * viewport_height`.
//!
//! - **Trigger once** (the default): the first time an element is in view it
//!   becomes revealed, emits one [`VisibilityChange`], and is ignored from
//!   then on.
//! - **Repeatable** (`trigger_once: false`, opt-in only): the element reverts
//!   when it leaves the view and reveals again when it comes back, emitting a
//!   change each way.
//!
//! Scroll and resize events arrive far more often than layout changes, so
//! [`ScrollVisibilityController::on_tick`] skips any tick that lands inside
//! the throttle interval of the last evaluated one and marks a trailing
//! evaluation as pending. The host schedules a timer for [`next_deadline`]
//! and calls [`poll`] there, so the position an element comes to rest at is
//! always evaluated even when no further scroll event arrives. [`flush`]
//! evaluates unconditionally.
//!
//! [`next_deadline`]: ScrollVisibilityController::next_deadline
//! [`poll`]: ScrollVisibilityController::poll
//! [`flush`]: ScrollVisibilityController::flush

use crate::subscription::{SubscriptionId, Subscribers};
use std::time::{Duration, Instant};

/// Minimum time between two evaluated scroll ticks.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

/// Fraction of the viewport height an element's top must cross.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Read-only access to layout measurements.
pub trait LayoutProbe {
    fn viewport_height(&self) -> f64;

    /// Top edge of the element relative to the viewport top, or `None` if
    /// the element is not currently laid out.
    fn element_top(&self, id: &str) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
        }
    }
}

impl VisibilityOptions {
    /// Opt into reverting and re-triggering.
    pub fn repeatable(threshold: f64) -> Self {
        Self {
            threshold,
            trigger_once: false,
        }
    }
}

/// One element flipping state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
    pub id: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Inside the throttle interval; a trailing evaluation is now pending.
    Throttled,
    /// Evaluated, with the number of elements that changed.
    Evaluated { changes: usize },
}

#[derive(Debug)]
struct Tracked {
    id: String,
    options: VisibilityOptions,
    revealed: bool,
}

pub struct ScrollVisibilityController {
    elements: Vec<Tracked>,
    min_interval: Duration,
    default_threshold: f64,
    last_tick: Option<Instant>,
    pending: bool,
    subscribers: Subscribers<dyn FnMut(&VisibilityChange)>,
}

impl Default for ScrollVisibilityController {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE, DEFAULT_THRESHOLD)
    }
}

impl ScrollVisibilityController {
    pub fn new(min_interval: Duration, default_threshold: f64) -> Self {
        let default_threshold = if default_threshold.is_finite() {
            default_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        Self {
            elements: Vec::new(),
            min_interval,
            default_threshold,
            last_tick: None,
            pending: false,
            subscribers: Subscribers::new(),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn default_threshold(&self) -> f64 {
        self.default_threshold
    }

    /// Tracks an element in trigger-once mode.
    pub fn track(&mut self, id: impl Into<String>, threshold: f64) {
        self.track_with(
            id,
            VisibilityOptions {
                threshold,
                trigger_once: true,
            },
        );
    }

    /// Tracks an element with explicit options. Tracking an id again updates
    /// its options and keeps its revealed flag.
    pub fn track_with(&mut self, id: impl Into<String>, options: VisibilityOptions) {
        let id = id.into();
        let options = VisibilityOptions {
            threshold: self.normalize_threshold(options.threshold),
            ..options
        };

        match self.elements.iter_mut().find(|t| t.id == id) {
            Some(tracked) => tracked.options = options,
            None => {
                log::debug!(
                    "event=visibility_track module=visibility id={} threshold={} trigger_once={}",
                    id,
                    options.threshold,
                    options.trigger_once
                );
                self.elements.push(Tracked {
                    id,
                    options,
                    revealed: false,
                });
            }
        }
    }

    pub fn untrack(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|t| t.id != id);
        self.elements.len() != before
    }

    pub fn is_tracked(&self, id: &str) -> bool {
        self.elements.iter().any(|t| t.id == id)
    }

    /// Revealed flag for an element; `false` for untracked ids.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements
            .iter()
            .find(|t| t.id == id)
            .is_some_and(|t| t.revealed)
    }

    /// Handles a scroll or resize event, subject to throttling.
    pub fn on_tick<P: LayoutProbe + ?Sized>(&mut self, probe: &P, now: Instant) -> TickOutcome {
        if self.is_throttled(now) {
            self.pending = true;
            return TickOutcome::Throttled;
        }
        TickOutcome::Evaluated {
            changes: self.evaluate_at(probe, now),
        }
    }

    /// Whether a throttled tick still awaits its trailing evaluation.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// When the pending trailing evaluation becomes due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.pending {
            return None;
        }
        self.last_tick.map(|last| last + self.min_interval)
    }

    /// Runs the trailing evaluation once it is due. Returns `None` when
    /// nothing is pending or the interval has not elapsed yet.
    pub fn poll<P: LayoutProbe + ?Sized>(&mut self, probe: &P, now: Instant) -> Option<usize> {
        if !self.pending || self.is_throttled(now) {
            return None;
        }
        Some(self.evaluate_at(probe, now))
    }

    /// Evaluates immediately, ignoring the throttle. Returns the number of
    /// elements that changed.
    pub fn flush<P: LayoutProbe + ?Sized>(&mut self, probe: &P) -> usize {
        self.pending = false;
        self.evaluate(probe)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&VisibilityChange) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn is_throttled(&self, now: Instant) -> bool {
        self.last_tick
            .is_some_and(|last| now.saturating_duration_since(last) < self.min_interval)
    }

    fn evaluate_at<P: LayoutProbe + ?Sized>(&mut self, probe: &P, now: Instant) -> usize {
        self.last_tick = Some(now);
        self.pending = false;
        self.evaluate(probe)
    }

    fn normalize_threshold(&self, threshold: f64) -> f64 {
        if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "event=visibility_track module=visibility status=fallback threshold={}",
                threshold
            );
            self.default_threshold
        }
    }

    fn evaluate<P: LayoutProbe + ?Sized>(&mut self, probe: &P) -> usize {
        let viewport = probe.viewport_height();
        if !(viewport.is_finite() && viewport > 0.0) {
            // No layout yet.
            return 0;
        }

        let mut changes = Vec::new();
        for tracked in &mut self.elements {
            if tracked.revealed && tracked.options.trigger_once {
                continue;
            }
            let Some(top) = probe.element_top(&tracked.id) else {
                continue;
            };
            let in_view = top < tracked.options.threshold * viewport;
            if in_view != tracked.revealed {
                tracked.revealed = in_view;
                changes.push(VisibilityChange {
                    id: tracked.id.clone(),
                    revealed: in_view,
                });
            }
        }

        for change in &changes {
            log::debug!(
                "event=visibility_change module=visibility id={} revealed={}",
                change.id,
                change.revealed
            );
            for callback in self.subscribers.iter_mut() {
                callback(change);
            }
        }
        changes.len()
    }
}
