//! Transient UI state: modal visibility and toast notifications
//!
//! Owns no catalog data. The frontend mirrors these values in signals and
//! drives the transitions from DOM events and timers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modal {
    /// Title search prompt
    Search,
    /// Local game details dialog
    Details,
    /// Generated yes/no confirmation
    Confirm,
}

/// Visibility of every modal. Each one is independently hidden or visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    visible: Vec<Modal>,
}

impl ModalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.visible.contains(&modal)
    }

    pub fn open(&mut self, modal: Modal) {
        if !self.is_open(modal) {
            self.visible.push(modal);
        }
    }

    /// Returns whether the modal was visible
    pub fn close(&mut self, modal: Modal) -> bool {
        let before = self.visible.len();
        self.visible.retain(|m| *m != modal);
        self.visible.len() != before
    }

    /// A click that landed on the modal's backdrop rather than its content
    pub fn backdrop_click(&mut self, modal: Modal) -> bool {
        self.close(modal)
    }

    /// Escape hides every visible modal and reports which ones were closed,
    /// most recently opened first
    pub fn escape(&mut self) -> Vec<Modal> {
        let mut closed = std::mem::take(&mut self.visible);
        closed.reverse();
        closed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Info => "#2196F3",
            ToastKind::Success => "#4CAF50",
            ToastKind::Warning => "#FF9800",
            ToastKind::Error => "#F44336",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Toasts in creation order. No limit; each is removed by its own timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id for the dismiss timer
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Returns false if the toast was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modals_are_independent() {
        let mut modals = ModalSet::new();
        modals.open(Modal::Search);
        modals.open(Modal::Details);
        assert!(modals.is_open(Modal::Search));
        assert!(modals.close(Modal::Search));
        assert!(!modals.is_open(Modal::Search));
        assert!(modals.is_open(Modal::Details));
        assert!(!modals.close(Modal::Confirm));
    }

    #[test]
    fn test_open_twice_is_idempotent() {
        let mut modals = ModalSet::new();
        modals.open(Modal::Details);
        modals.open(Modal::Details);
        assert!(modals.close(Modal::Details));
        assert_eq!(modals, ModalSet::new());
    }

    #[test]
    fn test_backdrop_click_closes_only_that_modal() {
        let mut modals = ModalSet::new();
        modals.open(Modal::Search);
        modals.open(Modal::Confirm);
        assert!(modals.backdrop_click(Modal::Search));
        assert!(modals.is_open(Modal::Confirm));
    }

    #[test]
    fn test_escape_closes_everything() {
        let mut modals = ModalSet::new();
        assert!(modals.escape().is_empty());
        modals.open(Modal::Search);
        modals.open(Modal::Confirm);
        assert_eq!(modals.escape(), vec![Modal::Confirm, Modal::Search]);
        assert_eq!(modals, ModalSet::new());
    }

    #[test]
    fn test_toasts_stack_in_creation_order() {
        let mut stack = ToastStack::new();
        let first = stack.push("Added to favorites", ToastKind::Success);
        let second = stack.push("Removed from favorites", ToastKind::Info);
        assert_ne!(first, second);
        let messages: Vec<&str> = stack.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Added to favorites", "Removed from favorites"]);

        assert!(stack.dismiss(first));
        assert!(!stack.dismiss(first));
        assert_eq!(stack.toasts()[0].id, second);
        assert!(stack.dismiss(second));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toast_kind_styles() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::Error.css_class(), "toast-error");
        assert_eq!(ToastKind::Success.color(), "#4CAF50");
    }
}
