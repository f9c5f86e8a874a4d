//! Scrollable data table with selection checkboxes.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::utils::text::truncate;

/// A table column header
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub title: String,
    /// Width in columns, including padding
    pub width: usize,
}

impl TableColumn {
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: String,
    /// Cell text, one entry per column
    pub cells: Vec<String>,
    /// Per-cell color overrides, indexed like `cells`. `None` (or a short
    /// vector) falls back to the default text color.
    pub cell_colors: Vec<Option<Color>>,
    /// Whether the row is in the bulk selection
    pub checked: bool,
}

/// Props for the DataTable component
#[derive(Default, Props)]
pub struct DataTableProps {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    /// Index of the cursor row
    pub highlighted_index: usize,
    /// First visible row index
    pub scroll_offset: usize,
    /// Number of visible rows
    pub visible_height: usize,
}

fn pad_cell(text: &str, width: usize) -> String {
    let cut = truncate(text, width.saturating_sub(1));
    format!("{:<width$}", cut, width = width)
}

/// Scrollable table with a header row and per-row selection checkboxes
#[component]
pub fn DataTable(props: &DataTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let start = props.scroll_offset;
    let total = props.rows.len();

    let has_more_above = start > 0;
    let above_lines = if has_more_above { 1 } else { 0 };
    let tentative_end = (start + props.visible_height.saturating_sub(above_lines)).min(total);
    let has_more_below = tentative_end < total;
    let below_lines = if has_more_below { 1 } else { 0 };
    let available = props.visible_height.saturating_sub(above_lines + below_lines);
    let end = (start + available).min(total);
    let has_more_below = end < total;

    let header_line: String = {
        let mut line = String::from("    ");
        for col in &props.columns {
            line.push_str(&pad_cell(&col.title, col.width));
        }
        line
    };

    let columns = props.columns.clone();
    let visible: Vec<TableRow> = props.rows[start..end.max(start)].to_vec();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
        ) {
            // Header row
            View(height: 1, padding_left: 1) {
                Text(
                    content: header_line,
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }

            #(has_more_above.then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(
                        content: format!("  {} more above", start),
                        color: theme.text_dimmed,
                    )
                }
            }))

            #(visible.iter().enumerate().map(|(i, row)| {
                let actual_index = start + i;
                let is_cursor = actual_index == props.highlighted_index;
                let marker = if row.checked { "[x] " } else { "[ ] " };
                let base = if is_cursor { theme.background } else { theme.text };
                let weight = if row.checked { Weight::Bold } else { Weight::Normal };
                // One Text per cell so status columns keep their own color;
                // the cursor row flattens everything to the highlight pair.
                let cells: Vec<AnyElement<'static>> = row
                    .cells
                    .iter()
                    .zip(&columns)
                    .enumerate()
                    .map(|(cell_index, (cell, col))| {
                        let color = if is_cursor {
                            base
                        } else {
                            row.cell_colors
                                .get(cell_index)
                                .copied()
                                .flatten()
                                .unwrap_or(theme.text)
                        };
                        element! {
                            Text(content: pad_cell(cell, col.width), color: color, weight: weight)
                        }
                        .into_any()
                    })
                    .collect();
                element! {
                    View(height: 1, padding_left: 1, background_color: if is_cursor {
                        Some(theme.highlight)
                    } else {
                        None
                    }) {
                        Text(content: marker, color: base, weight: weight)
                        #(cells)
                    }
                }
            }))

            #(has_more_below.then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(
                        content: format!("  {} more below", total - end),
                        color: theme.text_dimmed,
                    )
                }
            }))
        }
    }
}
