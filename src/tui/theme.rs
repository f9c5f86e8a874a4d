//! Theme system for TUI colors and styles.

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Payment status colors
    pub financial_paid: Color,
    pub financial_pending: Color,
    pub financial_refunded: Color,
    pub financial_default: Color,

    // Fulfillment status colors
    pub fulfillment_fulfilled: Color,
    pub fulfillment_unfulfilled: Color,
    pub fulfillment_partial: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub accent: Color,
    pub chip: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            financial_paid: Color::Green,
            financial_pending: Color::Yellow,
            financial_refunded: Color::Magenta,
            financial_default: Color::White,

            fulfillment_fulfilled: Color::Green,
            fulfillment_unfulfilled: Color::Yellow,
            fulfillment_partial: Color::Cyan,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            accent: Color::Cyan,
            chip: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Color for a payment status badge, matched case-insensitively.
    pub fn financial_color(&self, status: &str) -> Color {
        match status.to_lowercase().as_str() {
            "paid" => self.financial_paid,
            "pending" | "authorized" => self.financial_pending,
            "refunded" | "partially_refunded" => self.financial_refunded,
            _ => self.financial_default,
        }
    }

    /// Color for a fulfillment status badge, matched case-insensitively.
    pub fn fulfillment_color(&self, status: &str) -> Color {
        match status.to_lowercase().as_str() {
            "fulfilled" => self.fulfillment_fulfilled,
            "partially_fulfilled" | "in_progress" => self.fulfillment_partial,
            _ => self.fulfillment_unfulfilled,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
