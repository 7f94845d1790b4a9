//! User-facing notices.
//!
//! Short-lived toasts for things the user should hear about but that do not
//! block the board, such as a failed image generation.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    /// How long a toast of this kind stays up. Errors linger longest.
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Info | ToastVariant::Success => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    /// Assigned by [`ToastManager::push`]
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return its id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.push(toast);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop expired toasts.
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
