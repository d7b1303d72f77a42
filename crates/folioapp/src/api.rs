//! # API Facade
//!
//! [`FolioApi`] is the application root: it builds every controller once,
//! injects the storage and analytics collaborators, and hands out explicit
//! access to each piece of state. Presentation code talks to this type and
//! subscribes to the controllers it renders from; nothing is reachable
//! through globals.
//!
//! ## What the API Adds
//!
//! - **Fallback content**: a content document that fails validation is
//!   logged, captured by the [`ErrorBoundary`], and replaced by an empty
//!   store, so the site still renders its other sections.
//! - **Analytics**: user-facing actions (`click_chip`, `toggle_theme`,
//!   `open_project`) are reported to the sink on the way through.
//!
//! ## Generic Over Collaborators
//!
//! `FolioApi<B: PreferenceBackend, S: AnalyticsSink>`:
//! - Production: `FolioApi<FsBackend, LogSink>` via [`FolioApi::open`]
//! - Testing: `FolioApi<MemBackend, MemorySink>` via [`FolioApi::new`]

use crate::analytics::{Analytics, AnalyticsSink, LogSink};
use crate::boundary::ErrorBoundary;
use crate::config::FolioConfig;
use crate::content::ContentStore;
use crate::controllers::{FilterStateController, ScrollVisibilityController, ThemeController};
use crate::error::DataLoadError;
use crate::logging::init_logging;
use crate::model::{ContentRecord, ThemeState};
use crate::store::{FsBackend, PreferenceBackend};
use std::path::PathBuf;

/// Subdirectory of the storage root that receives log files.
pub const LOG_DIR: &str = "logs";

pub struct FolioApi<B: PreferenceBackend, S: AnalyticsSink> {
    filters: FilterStateController,
    theme: ThemeController<B>,
    visibility: ScrollVisibilityController,
    analytics: Analytics<S>,
    boundary: ErrorBoundary,
}

impl FolioApi<FsBackend, LogSink> {
    /// Production wiring: file logging under `<storage>/logs` at the
    /// configured level, content from the configured path or the bundled
    /// document, preferences on disk, analytics to the log.
    ///
    /// A logging bootstrap failure (for example a host that already
    /// installed its own logger) is reported through `log` and otherwise
    /// ignored.
    pub fn open(config: &FolioConfig) -> Self {
        let backend = match &config.storage_dir {
            Some(dir) => FsBackend::new(dir.clone()),
            None => FsBackend::from_platform_dirs()
                .unwrap_or_else(|| FsBackend::new(PathBuf::from(".folio"))),
        };

        let log_dir = backend.root().join(LOG_DIR);
        if let Err(err) = init_logging(&config.log_level, &log_dir) {
            log::warn!("event=logging_init module=api status=skipped error={}", err);
        }

        let content = match &config.content_path {
            Some(path) => ContentStore::from_path(path),
            None => ContentStore::bundled(),
        };

        Self::new(config, content, backend, LogSink)
    }
}

impl<B: PreferenceBackend, S: AnalyticsSink> FolioApi<B, S> {
    pub fn new(
        config: &FolioConfig,
        content: Result<ContentStore, DataLoadError>,
        backend: B,
        sink: S,
    ) -> Self {
        let mut boundary = ErrorBoundary::new(config.max_render_retries);

        let store = match content {
            Ok(store) => store,
            Err(e) => {
                log::error!("event=content_load module=api status=fallback error={}", e);
                boundary.capture(&e);
                ContentStore::empty()
            }
        };

        Self {
            filters: FilterStateController::new(store),
            theme: ThemeController::init(backend, config.theme_key()),
            visibility: ScrollVisibilityController::new(
                config.scroll_throttle(),
                config.reveal_threshold,
            ),
            analytics: Analytics::new(sink),
            boundary,
        }
    }

    pub fn content(&self) -> &ContentStore {
        self.filters.store()
    }

    pub fn filters(&self) -> &FilterStateController {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterStateController {
        &mut self.filters
    }

    pub fn theme(&self) -> &ThemeController<B> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeController<B> {
        &mut self.theme
    }

    pub fn visibility(&self) -> &ScrollVisibilityController {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut ScrollVisibilityController {
        &mut self.visibility
    }

    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    pub fn boundary_mut(&mut self) -> &mut ErrorBoundary {
        &mut self.boundary
    }

    pub fn analytics(&self) -> &Analytics<S> {
        &self.analytics
    }

    /// Applies a chip click and reports it. Returns the number of matches.
    pub fn click_chip(&mut self, value: &str) -> usize {
        self.filters.set_chip_filter(value);
        let matched = self.filters.view().len();
        self.analytics
            .track("chip_click", "projects", value, Some(matched as f64));
        matched
    }

    /// Flips the theme and reports the new value.
    pub fn toggle_theme(&mut self) -> ThemeState {
        let theme = self.theme.toggle();
        self.analytics.track("toggle_theme", "ui", theme.as_str(), None);
        theme
    }

    /// Looks a project up for navigation and reports the visit.
    pub fn open_project(&self, key: &str) -> Option<&ContentRecord> {
        let record = self.filters.store().get(key)?;
        self.analytics.track("open_project", "projects", key, None);
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemorySink;
    use crate::boundary::BoundaryState;
    use crate::store::MemBackend;

    fn api() -> FolioApi<MemBackend, MemorySink> {
        FolioApi::new(
            &FolioConfig::default(),
            ContentStore::bundled(),
            MemBackend::new(),
            MemorySink::new(),
        )
    }

    #[test]
    fn test_bundled_content_is_visible() {
        let api = api();
        assert!(api.boundary().is_healthy());
        assert_eq!(api.filters().view().len(), api.content().len());
    }

    #[test]
    fn test_failed_content_falls_back_to_empty() {
        let api = FolioApi::new(
            &FolioConfig::default(),
            ContentStore::load("[{\"key\": \"a\"}]"),
            MemBackend::new(),
            MemorySink::new(),
        );
        assert!(api.content().is_empty());
        assert!(matches!(
            api.boundary().state(),
            BoundaryState::Faulted { .. }
        ));
    }

    #[test]
    fn test_click_chip_reports_match_count() {
        let mut api = api();
        let matched = api.click_chip("Kotlin");
        assert_eq!(matched, 2);

        let events = api.analytics().sink().events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, "chip_click");
        assert_eq!(events[0].value, Some(2.0));
    }

    #[test]
    fn test_toggle_theme_persists_and_reports() {
        let mut api = api();
        assert_eq!(api.toggle_theme(), ThemeState::Hacker);
        assert_eq!(
            api.theme().backend().peek("theme"),
            Some("hacker".to_string())
        );
        assert_eq!(api.analytics().sink().events()[0].label, "hacker");
    }

    #[test]
    fn test_open_project_unknown_key() {
        let api = api();
        assert!(api.open_project("missing").is_none());
        assert!(api.analytics().sink().events().is_empty());

        let record = api.open_project("trailmate").unwrap();
        assert!(record.link.starts_with("https://"));
        assert_eq!(api.analytics().sink().events().len(), 1);
    }

    #[test]
    fn test_config_reaches_controllers() {
        let config = FolioConfig {
            theme_key: "site-theme".to_string(),
            scroll_throttle_ms: 250,
            max_render_retries: 1,
            ..Default::default()
        };
        let api = FolioApi::new(
            &config,
            ContentStore::bundled(),
            MemBackend::with_value("site-theme", "hacker"),
            MemorySink::new(),
        );
        assert_eq!(api.theme().current(), ThemeState::Hacker);
        assert_eq!(
            api.visibility().min_interval(),
            std::time::Duration::from_millis(250)
        );
        assert_eq!(api.boundary().retries_left(), 1);
    }
}
