//! Horizontal bar chart for analytics series.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::utils::text::truncate;

/// One bar in the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    /// Display value, shown verbatim after the bar
    pub value: String,
    /// Numeric magnitude used for the bar length
    pub magnitude: f64,
}

/// Props for the BarChart component
#[derive(Default, Props)]
pub struct BarChartProps {
    pub bars: Vec<ChartBar>,
    /// Label gutter width in columns
    pub label_width: usize,
    /// Maximum bar length in columns
    pub bar_width: usize,
}

/// Horizontal bars scaled against the largest magnitude in the series
#[component]
pub fn BarChart(props: &BarChartProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let label_width = if props.label_width == 0 {
        28
    } else {
        props.label_width
    };
    let bar_width = if props.bar_width == 0 {
        30
    } else {
        props.bar_width
    };

    let max = props
        .bars
        .iter()
        .map(|b| b.magnitude)
        .fold(0.0_f64, f64::max);

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
        ) {
            #(props.bars.iter().map(|bar| {
                let filled = if max > 0.0 {
                    ((bar.magnitude / max) * bar_width as f64).round() as usize
                } else {
                    0
                };
                // Non-zero values always get at least one cell
                let filled = if bar.magnitude > 0.0 { filled.max(1) } else { filled };
                let label = format!(
                    "{:<width$}",
                    truncate(&bar.label, label_width.saturating_sub(1)),
                    width = label_width,
                );
                element! {
                    View(height: 1, flex_direction: FlexDirection::Row) {
                        Text(content: label, color: theme.text_dimmed)
                        Text(content: "█".repeat(filled), color: theme.accent)
                        Text(content: format!(" {}", bar.value), color: theme.text)
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_bar_construction() {
        let bar = ChartBar {
            label: "August 27, 2026 1:00 PM".into(),
            value: "42.50".into(),
            magnitude: 42.5,
        };
        assert_eq!(bar.value, "42.50");
    }
}
