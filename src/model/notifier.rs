//! Notifier Model
//!
//! Holds at most one toast. Every call to `notify` replaces the current
//! toast and restarts its hide deadline, so an older message's deadline can
//! never hide a newer message early.

use std::time::{Duration, Instant};

use super::types::{Severity, Toast};

/// Default time a toast stays visible
pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug)]
pub struct Notifier {
    current: Option<Toast>,
    hide_after: Duration,
}

impl Notifier {
    pub fn new(hide_after: Duration) -> Self {
        Self {
            current: None,
            hide_after,
        }
    }

    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Show `message` now, superseding whatever was showing
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notify_at(message, severity, Instant::now());
    }

    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            severity,
            shown_at: now,
        });
    }

    /// Toast to draw, if any. Expiry is applied by `tick`.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Whether a toast would be visible at `now`
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) < self.hide_after)
    }

    /// Hide the toast once its deadline (measured from the latest call) passed
    pub fn tick(&mut self, now: Instant) {
        if self.current.is_some() && !self.is_visible_at(now) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_AFTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_shows_message_with_severity() {
        let mut notifier = Notifier::default();
        let now = Instant::now();
        notifier.notify_at("Foto enviada com sucesso!", Severity::Success, now);

        let toast = notifier.current().unwrap();
        assert_eq!(toast.message, "Foto enviada com sucesso!");
        assert_eq!(toast.severity, Severity::Success);
        assert!(notifier.is_visible_at(now));
    }

    #[test]
    fn test_toast_hides_after_delay() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.notify_at("x", Severity::Error, start);

        notifier.tick(start + Duration::from_millis(2999));
        assert!(notifier.current().is_some());

        notifier.tick(start + Duration::from_millis(3000));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_newer_message_is_not_hidden_by_older_deadline() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.notify_at("first", Severity::Success, start);
        notifier.notify_at("second", Severity::Error, start + Duration::from_millis(1000));

        // First call's deadline
        notifier.tick(start + Duration::from_millis(3000));
        let toast = notifier.current().expect("second toast still visible");
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Error);

        // Second call's deadline
        notifier.tick(start + Duration::from_millis(4000));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_custom_hide_after() {
        let mut notifier = Notifier::new(Duration::from_millis(500));
        let start = Instant::now();
        notifier.notify_at("x", Severity::Success, start);
        assert!(notifier.is_visible_at(start + Duration::from_millis(499)));
        assert!(!notifier.is_visible_at(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_dismiss() {
        let mut notifier = Notifier::default();
        notifier.notify("x", Severity::Success);
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }
}
