//! Toast contract toward the notification/presentation collaborator.
//!
//! # Responsibility
//! - Define the payload every user-significant mutation emits.
//! - Keep the presentation side behind a trait so core stays renderless.
//!
//! # Invariants
//! - Core never formats or displays toasts; it only emits payloads.

use log::info;

/// Visual treatment requested from the toast collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Payload handed to the toast collaborator after a user-significant action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    /// Title-only toast with default variant.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    /// Toast with a description line.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Default,
        }
    }

    /// Marks the toast as destructive.
    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

/// Sink for toast payloads.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Notifier that routes toasts into the structured log.
///
/// Used by headless consumers (CLI smoke binary) where no toast surface
/// exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, toast: Toast) {
        info!(
            "event=toast module=notify variant={:?} title={}",
            toast.variant, toast.title
        );
    }
}

/// Notifier that records every toast for later assertion.
///
/// Exposed publicly so integration tests can observe the notification
/// contract without a presentation layer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub toasts: Vec<Toast>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles of recorded toasts, in emission order.
    pub fn titles(&self) -> Vec<&str> {
        self.toasts.iter().map(|toast| toast.title.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::{LogNotifier, Notifier, RecordingNotifier, Toast, ToastVariant};

    #[test]
    fn toast_builders_set_description_and_variant() {
        let plain = Toast::titled("Job saved successfully!");
        assert_eq!(plain.variant, ToastVariant::Default);
        assert!(plain.description.is_none());

        let rejected =
            Toast::with_description("Alumni Rejected", "The alumni profile has been rejected.")
                .destructive();
        assert_eq!(rejected.variant, ToastVariant::Destructive);
        assert_eq!(
            rejected.description.as_deref(),
            Some("The alumni profile has been rejected.")
        );
    }

    #[test]
    fn log_notifier_consumes_toasts_without_a_toast_surface() {
        let mut notifier = LogNotifier;
        notifier.notify(Toast::titled("Post created successfully!"));
        notifier.notify(Toast::titled("Job removed from saved").destructive());
    }

    #[test]
    fn recording_notifier_preserves_emission_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify(Toast::titled("first"));
        notifier.notify(Toast::titled("second"));
        assert_eq!(notifier.titles(), vec!["first", "second"]);
    }
}
