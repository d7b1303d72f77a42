//! # Analytics
//!
//! Event tracking is fire-and-forget. The core builds an [`AnalyticsEvent`]
//! and hands it to an [`AnalyticsSink`]; whatever the sink does with it
//! (forward to a tag manager, write a log line, buffer it) is invisible to
//! the caller. [`Analytics::track`] swallows sink failures.
//!
//! ## Event Shape
//!
//! | Field | Type | Example |
//! |-------|------|---------|
//! | `action` | string | `"toggle_theme"` |
//! | `category` | string | `"ui"` |
//! | `label` | string | `"hacker"` |
//! | `value` | optional number | `3.0` |
//! | `recorded_at` | UTC timestamp | set when the event is built |

use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(action: &str, category: &str, label: &str, value: Option<f64>) -> Self {
        Self {
            action: action.to_string(),
            category: category.to_string(),
            label: label.to_string(),
            value,
            recorded_at: Utc::now(),
        }
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    fn record(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Writes each event as a JSON line at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&self, event: &AnalyticsEvent) -> Result<()> {
        let line = serde_json::to_string(event)?;
        log::info!(target: "folio::analytics", "{}", line);
        Ok(())
    }
}

/// Keeps events in memory. Failures can be simulated.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: RefCell<Vec<AnalyticsEvent>>,
    simulate_error: Cell<bool>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_simulate_error(&self, simulate: bool) {
        self.simulate_error.set(simulate);
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: &AnalyticsEvent) -> Result<()> {
        if self.simulate_error.get() {
            return Err(FolioError::Analytics("Simulated sink failure".to_string()));
        }
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

/// Fire-and-forget front for a sink.
pub struct Analytics<S: AnalyticsSink> {
    sink: S,
}

impl<S: AnalyticsSink> Analytics<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Records an event. Sink errors are logged at debug level and dropped.
    pub fn track(&self, action: &str, category: &str, label: &str, value: Option<f64>) {
        let event = AnalyticsEvent::new(action, category, label, value);
        if let Err(e) = self.sink.record(&event) {
            log::debug!(
                "event=analytics_drop module=analytics action={} error={}",
                action,
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_records_event() {
        let analytics = Analytics::new(MemorySink::new());
        analytics.track("chip_click", "projects", "Kotlin", None);
        analytics.track("scroll_depth", "engagement", "home", Some(75.0));

        let events = analytics.sink().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, "chip_click");
        assert_eq!(events[0].label, "Kotlin");
        assert_eq!(events[1].value, Some(75.0));
    }

    #[test]
    fn test_track_swallows_sink_failure() {
        let analytics = Analytics::new(MemorySink::new());
        analytics.sink().set_simulate_error(true);
        analytics.track("toggle_theme", "ui", "hacker", None);
        assert!(analytics.sink().events().is_empty());
    }

    #[test]
    fn test_value_omitted_from_json_when_absent() {
        let event = AnalyticsEvent::new("open_link", "projects", "trailmate", None);
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("\"value\""));
        assert!(json.contains("\"action\":\"open_link\""));
    }

    #[test]
    fn test_log_sink_accepts_events() {
        let analytics = Analytics::new(LogSink);
        analytics.track("toggle_theme", "ui", "default", None);
        assert!(LogSink
            .record(&AnalyticsEvent::new("a", "b", "c", Some(1.0)))
            .is_ok());
    }
}
