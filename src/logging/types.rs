//! Core logging types: per-icon reports, status, and the [`Log`] trait.

/// Outcome of generating one icon class, for summary reporting.
#[derive(Debug, Clone)]
pub struct IconReport {
    /// Logical icon name.
    pub name: String,
    /// Final status of the icon.
    pub status: IconStatus,
    /// Optional detail message (e.g., the error description).
    pub message: Option<String>,
}

/// Status of one requested icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStatus {
    /// A rule was generated.
    Generated,
    /// The name was referenced but no icon file provides it.
    Unknown,
    /// The icon exists but its rule could not be generated.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) is the production implementation;
/// command code takes `&dyn Log` so tests can capture messages instead.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record an icon result for the summary.
    fn record_icon(&self, name: &str, status: IconStatus, message: Option<&str>);
}
