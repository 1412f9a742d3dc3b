//! Transient toast notifications.
//!
//! Toasts are produced by the bootstrapper, the referral action and the
//! live feed, and delivered over an unbounded channel to whatever front end
//! displays them.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::live::LiveEvent;

/// A toast starts fading after this long
pub const FADE_AFTER: Duration = Duration::from_millis(2000);

/// A toast is removed after this long
pub const REMOVE_AFTER: Duration = Duration::from_millis(2800);

/// Generic message for a failed page load
pub const LOAD_FAILED_MESSAGE: &str = "Some data failed to load";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    Fading,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }

    pub fn class_name(&self) -> &'static str {
        match self.kind {
            ToastKind::Info => "bg-slate-900 text-white",
            ToastKind::Error => "bg-red-600 text-white",
        }
    }

    /// Where the toast is in its lifetime `elapsed` after being shown.
    pub fn phase(elapsed: Duration) -> ToastPhase {
        if elapsed >= REMOVE_AFTER {
            ToastPhase::Removed
        } else if elapsed >= FADE_AFTER {
            ToastPhase::Fading
        } else {
            ToastPhase::Shown
        }
    }
}

pub type ToastReceiver = mpsc::UnboundedReceiver<Toast>;

/// Sending half of the toast channel. Clone is cheap.
#[derive(Clone)]
pub struct Toaster {
    tx: mpsc::UnboundedSender<Toast>,
}

impl Toaster {
    pub fn channel() -> (Self, ToastReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn show(&self, toast: Toast) {
        if let Err(e) = self.tx.send(toast) {
            warn!(toast = %e.0.message, "Toast dropped - receiver closed");
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(Toast::info(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::error(message));
    }

    /// Route a live event: notifications become toasts, chat previews are
    /// only logged.
    pub fn dispatch_live(&self, event: LiveEvent) {
        match event {
            LiveEvent::Notification(push) => self.info(push.toast_text()),
            LiveEvent::ChatPreview(raw) => debug!(frame = %raw, "Chat preview received"),
        }
    }
}
