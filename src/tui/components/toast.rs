//! Toast notification bar for action feedback.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
    Success,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self { message, level }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Color associated with this toast's level
    pub fn color(&self) -> Color {
        let theme = theme();
        match self.level {
            ToastLevel::Info => theme.accent,
            ToastLevel::Error => theme.error,
            ToastLevel::Success => theme.success,
        }
    }
}

/// Render a toast bar as an optional element for use inside `element!`.
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_levels() {
        assert_eq!(Toast::success("ok").level, ToastLevel::Success);
        assert_eq!(Toast::error("no").level, ToastLevel::Error);
        assert!(matches!(Toast::error("no").color(), Color::Red));
    }
}
