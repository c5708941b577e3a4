//! Structured logger with dry-run awareness and summary collection.
use std::sync::Mutex;

use super::types::{IconReport, IconStatus, Log};

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
///
/// The `record_icon` method is **not** included because its signature differs
/// from the `fn(&self, &str)` pattern shared by the display methods.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with dry-run awareness and summary collection.
///
/// Messages go through [`tracing`]; [`init_subscriber`](super::init_subscriber)
/// decides how they are rendered.
#[derive(Debug, Default)]
pub struct Logger {
    icons: Mutex<Vec<IconReport>>,
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone of all recorded icon reports.
    #[must_use]
    pub fn icon_reports(&self) -> Vec<IconReport> {
        self.icons.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "heroicons::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "heroicons::dry_run", "{msg}");
    }

    /// Record an icon result for the summary.
    pub fn record_icon(&self, name: &str, status: IconStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.icons.lock() {
            guard.push(IconReport {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the recorded icons with `status`.
    #[must_use]
    pub fn count(&self, status: IconStatus) -> usize {
        self.icons.lock().map_or(0, |guard| {
            guard.iter().filter(|r| r.status == status).count()
        })
    }

    /// Return `true` if any existing icon failed to generate.
    ///
    /// Unknown names are not failures; callers decide whether they matter.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.count(IconStatus::Failed) > 0
    }

    /// Print the summary of all recorded icons.
    ///
    /// Generated icons are only counted; unknown and failed ones are listed
    /// by name so each usage problem is visible.
    pub fn print_summary(&self) {
        let reports = match self.icons.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        if reports.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut generated = 0u32;
        let mut unknown = 0u32;
        let mut failed = 0u32;

        for report in &reports {
            let (icon, color) = match report.status {
                IconStatus::Generated => {
                    generated += 1;
                    continue;
                }
                IconStatus::Unknown => {
                    unknown += 1;
                    ("?", "\x1b[33m")
                }
                IconStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = report
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", report.name));
        }

        let total = generated + unknown + failed;
        self.info(&format!(
            "{total} icons: \x1b[32m{generated} generated\x1b[0m, \x1b[33m{unknown} unknown\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_icon(&self, name: &str, status: IconStatus, message: Option<&str>) {
        self.record_icon(name, status, message);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn logger_new() {
        let log = Logger::new();
        assert!(log.icon_reports().is_empty(), "expected empty report list");
    }

    #[test]
    fn record_icon_generated() {
        let log = Logger::new();
        log.record_icon("home", IconStatus::Generated, None);
        let reports = log.icon_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "home");
        assert_eq!(reports[0].status, IconStatus::Generated);
        assert!(reports[0].message.is_none());
    }

    #[test]
    fn record_icon_with_message() {
        let log = Logger::new();
        log.record_icon("hom", IconStatus::Unknown, Some("unknown icon 'hom'"));
        assert_eq!(
            log.icon_reports()[0].message.as_deref(),
            Some("unknown icon 'hom'")
        );
    }

    #[test]
    fn counts_by_status() {
        let log = Logger::new();
        log.record_icon("a", IconStatus::Generated, None);
        log.record_icon("b", IconStatus::Generated, None);
        log.record_icon("c", IconStatus::Unknown, None);
        assert_eq!(log.count(IconStatus::Generated), 2);
        assert_eq!(log.count(IconStatus::Unknown), 1);
        assert_eq!(log.count(IconStatus::Failed), 0);
    }

    #[test]
    fn has_failures_ignores_unknown_names() {
        let log = Logger::new();
        log.record_icon("a", IconStatus::Generated, None);
        log.record_icon("b", IconStatus::Unknown, None);
        assert!(!log.has_failures());

        log.record_icon("c", IconStatus::Failed, Some("read error"));
        assert!(log.has_failures());
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let log = Logger::new();
        let dyn_log: &dyn Log = &log;
        dyn_log.record_icon("x", IconStatus::Failed, None);
        dyn_log.info("hello");
        assert_eq!(log.icon_reports().len(), 1);
    }

    #[test]
    fn print_summary_without_reports_is_noop() {
        Logger::new().print_summary();
    }
}
