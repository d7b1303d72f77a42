//! # Error Boundary
//!
//! The top-level catch-all for render failures. A failure moves the boundary
//! to [`BoundaryState::Faulted`], which the host shows as a generic
//! "something went wrong" panel with a retry button.
//!
//! ```text
//!            capture                 retry (attempts < max)
//! Healthy ───────────▶ Faulted ──────────────────────────▶ Healthy
//!                         │
//!                         │ retry (attempts == max)
//!                         ▼
//!                   ReloadRequired ──── reset ────▶ Healthy
//! ```
//!
//! Retries are counted across the boundary's lifetime; only [`reset`]
//! (a full reload) clears the count.
//!
//! [`reset`]: ErrorBoundary::reset

use std::fmt::Display;

/// Retries allowed before a reload is required.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryState {
    Healthy,
    Faulted { message: String },
    ReloadRequired { message: String },
}

#[derive(Debug)]
pub struct ErrorBoundary {
    state: BoundaryState,
    attempts: u32,
    max_retries: u32,
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

impl ErrorBoundary {
    pub fn new(max_retries: u32) -> Self {
        Self {
            state: BoundaryState::Healthy,
            attempts: 0,
            max_retries,
        }
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    pub fn is_healthy(&self) -> bool {
        self.state == BoundaryState::Healthy
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn retries_left(&self) -> u32 {
        self.max_retries.saturating_sub(self.attempts)
    }

    /// Records a failure. Once a reload is required further failures are ignored.
    pub fn capture(&mut self, error: impl Display) {
        if matches!(self.state, BoundaryState::ReloadRequired { .. }) {
            return;
        }
        let message = error.to_string();
        log::error!(
            "event=render_error module=boundary attempts={} error={}",
            self.attempts,
            message
        );
        self.state = BoundaryState::Faulted { message };
    }

    /// Runs a render step, capturing its error. Returns `None` on failure or
    /// while a reload is required.
    pub fn guard<T, E, F>(&mut self, render: F) -> Option<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        if matches!(self.state, BoundaryState::ReloadRequired { .. }) {
            return None;
        }
        match render() {
            Ok(value) => Some(value),
            Err(e) => {
                self.capture(e);
                None
            }
        }
    }

    /// User pressed retry. Healthy boundaries are left untouched.
    pub fn retry(&mut self) -> &BoundaryState {
        let message = match &self.state {
            BoundaryState::Faulted { message } => message.clone(),
            _ => return &self.state,
        };

        if self.attempts < self.max_retries {
            self.attempts += 1;
            log::info!(
                "event=render_retry module=boundary attempt={} max={}",
                self.attempts,
                self.max_retries
            );
            self.state = BoundaryState::Healthy;
        } else {
            log::warn!("event=render_reload_required module=boundary");
            self.state = BoundaryState::ReloadRequired { message };
        }
        &self.state
    }

    /// Full reload: clears the fault and the retry count.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Healthy;
        self.attempts = 0;
    }
}
