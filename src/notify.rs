//! Toast Notifications
//!
//! One toast at a time, auto-dismissed after the configured duration.

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Feedback for one finished user action
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// The toast currently on screen. A newer toast replaces the older one, and
/// the older one's dismissal leaves the newer one alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationState {
    pub slot: RwSignal<ToastSlot>,
    pub duration_ms: u32,
}

impl NotificationState {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
            duration_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn notify(&self, notice: Notice) {
        self.show(notice.kind, notice.message);
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.slot.update(|slot| id = slot.show(kind, message));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let slot = self.slot;
        Timeout::new(self.duration_ms, move || {
            slot.update(|s| s.dismiss(id));
        })
        .forget();
    }

    // No timers outside the browser; the toast stays until replaced
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

// Global accessor helpers
pub fn provide_notification_state(duration_ms: u32) -> NotificationState {
    let state = NotificationState::new(duration_ms);
    provide_context(state);
    state
}

pub fn use_notifications() -> NotificationState {
    expect_context::<NotificationState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_toast_replaces_older() {
        let mut slot = ToastSlot::default();
        let first = slot.show(ToastKind::Success, "Activity added successfully! 🎉");
        let second = slot.show(ToastKind::Error, "Error loading activities");
        assert_ne!(first, second);

        let current = slot.current().unwrap();
        assert_eq!(current.kind, ToastKind::Error);
        assert_eq!(current.message, "Error loading activities");
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.show(ToastKind::Success, "one");
        let second = slot.show(ToastKind::Success, "two");

        slot.dismiss(first);
        assert_eq!(slot.current().map(|t| t.message.as_str()), Some("two"));

        slot.dismiss(second);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_kind_class_names() {
        assert_eq!(ToastKind::Success.as_str(), "success");
        assert_eq!(ToastKind::Error.as_str(), "error");
    }
}
