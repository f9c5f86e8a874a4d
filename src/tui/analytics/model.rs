//! Analytics screen state: date-range presets and the revenue series.

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};

use crate::display::format_point_label;
use crate::gateway::Order;
use crate::tui::components::Toast;

/// An inclusive day-level date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub label: &'static str,
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Preset ranges, anchored on the given day.
    pub fn presets(today: Date) -> Vec<DateRange> {
        let yesterday = today.saturating_sub(1.day());
        vec![
            DateRange {
                label: "Today",
                start: today,
                end: today,
            },
            DateRange {
                label: "Yesterday",
                start: yesterday,
                end: yesterday,
            },
            DateRange {
                label: "Last 7 days",
                start: today.saturating_sub(6.days()),
                end: today,
            },
            DateRange {
                label: "Last 30 days",
                start: today.saturating_sub(29.days()),
                end: today,
            },
        ]
    }

    /// The search query narrowing orders to this range. Boundaries cover the
    /// start day's first instant through the end day's last whole second,
    /// and the platform receives the string verbatim.
    pub fn query(&self) -> String {
        format!(
            "created_at:>={}T00:00:00Z AND created_at:<={}T23:59:59Z",
            self.start, self.end,
        )
    }
}

/// One revenue point, one per fetched order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    /// Total amount, verbatim from the payload.
    pub value: String,
    /// Parsed amount for bar scaling; unparsable totals chart as zero.
    pub magnitude: f64,
}

/// Map fetched orders 1:1 into chart points. No bucketing or aggregation;
/// each order is its own point.
pub fn build_series(orders: &[Order]) -> Vec<SeriesPoint> {
    orders
        .iter()
        .map(|order| SeriesPoint {
            label: format_point_label(&order.created_at),
            value: order.total_amount.clone(),
            magnitude: order.total_amount.parse().unwrap_or(0.0),
        })
        .collect()
}

/// State for the analytics screen.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    pub presets: Vec<DateRange>,
    pub range_index: usize,
    pub points: Vec<SeriesPoint>,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub toast: Option<Toast>,
    pub should_exit: bool,
    /// Number of reads issued so far. Each range change adds exactly one.
    pub fetches: u32,
}

impl AnalyticsState {
    pub fn new(today: Date) -> Self {
        Self {
            presets: DateRange::presets(today),
            // Default to today
            range_index: 0,
            points: Vec::new(),
            is_loading: true,
            load_error: None,
            toast: None,
            should_exit: false,
            fetches: 0,
        }
    }

    pub fn now() -> Self {
        Self::new(Zoned::now().date())
    }

    pub fn range(&self) -> &DateRange {
        &self.presets[self.range_index]
    }

    /// Switch to another preset. Returns true when the range actually
    /// changed, in which case the caller issues exactly one new read.
    pub fn set_range(&mut self, index: usize) -> bool {
        if index >= self.presets.len() || index == self.range_index {
            return false;
        }
        self.range_index = index;
        self.is_loading = true;
        self.fetches += 1;
        true
    }

    /// A read landed: the previous points are discarded wholesale. The tag
    /// is the `fetches` count at the time the read was issued; a response
    /// from a superseded range is dropped so a slow fetch can never
    /// overwrite a newer one.
    pub fn series_loaded(&mut self, fetch_tag: u32, points: Vec<SeriesPoint>) {
        if fetch_tag != self.fetches {
            return;
        }
        self.points = points;
        self.is_loading = false;
        self.load_error = None;
    }

    pub fn load_failed(&mut self, fetch_tag: u32, message: String) {
        if fetch_tag != self.fetches {
            return;
        }
        self.is_loading = false;
        self.load_error = Some(message.clone());
        self.toast = Some(Toast::error(message));
    }

    pub fn total_revenue(&self) -> f64 {
        self.points.iter().map(|p| p.magnitude).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn order(created_at: &str, total: &str) -> Order {
        Order {
            id: "1".to_string(),
            name: "#1001".to_string(),
            created_at: created_at.to_string(),
            customer_first_name: None,
            channel_title: None,
            total_amount: total.to_string(),
            financial_status: "PAID".to_string(),
            fulfillment_status: "UNFULFILLED".to_string(),
        }
    }

    #[test]
    fn test_single_day_range_covers_day_boundaries() {
        let today = date(2026, 8, 27);
        let range = &DateRange::presets(today)[0];
        assert_eq!(
            range.query(),
            "created_at:>=2026-08-27T00:00:00Z AND created_at:<=2026-08-27T23:59:59Z"
        );
    }

    #[test]
    fn test_yesterday_and_rolling_presets() {
        let today = date(2026, 8, 27);
        let presets = DateRange::presets(today);
        assert_eq!(presets[1].start, date(2026, 8, 26));
        assert_eq!(presets[1].end, date(2026, 8, 26));
        assert_eq!(presets[2].start, date(2026, 8, 21));
        assert_eq!(presets[3].start, date(2026, 7, 29));
    }

    #[test]
    fn test_series_is_one_point_per_order() {
        let orders = vec![
            order("2026-08-27T13:15:00Z", "19.99"),
            order("2026-08-27T14:00:00Z", "not-a-number"),
        ];
        let series = build_series(&orders);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, "19.99");
        assert_eq!(series[1].magnitude, 0.0);
        // Value is passed through verbatim even when unparsable
        assert_eq!(series[1].value, "not-a-number");
    }

    #[test]
    fn test_range_change_issues_exactly_one_read() {
        let mut state = AnalyticsState::new(date(2026, 8, 27));
        assert_eq!(state.fetches, 0);

        assert!(state.set_range(2));
        assert_eq!(state.fetches, 1);

        // Same range again: no new read
        assert!(!state.set_range(2));
        assert_eq!(state.fetches, 1);

        // Out of bounds: no new read
        assert!(!state.set_range(9));
        assert_eq!(state.fetches, 1);
    }

    #[test]
    fn test_new_series_discards_previous_points() {
        let mut state = AnalyticsState::new(date(2026, 8, 27));
        state.series_loaded(0, build_series(&[order("2026-08-27T13:15:00Z", "10.00")]));
        assert_eq!(state.points.len(), 1);

        state.set_range(1);
        state.series_loaded(1, build_series(&[
            order("2026-08-27T09:00:00Z", "5.00"),
            order("2026-08-27T10:00:00Z", "6.00"),
        ]));
        assert_eq!(state.points.len(), 2);
        assert_eq!(state.total_revenue(), 11.0);
    }

    #[test]
    fn test_superseded_read_is_dropped() {
        let mut state = AnalyticsState::new(date(2026, 8, 27));
        let stale_tag = state.fetches;
        state.set_range(1);

        // The older read lands after the range changed: nothing applies
        state.series_loaded(stale_tag, build_series(&[order("2026-08-27T13:15:00Z", "10.00")]));
        assert!(state.points.is_empty());
        assert!(state.is_loading);

        // A stale failure is ignored the same way
        state.load_failed(stale_tag, "timed out".to_string());
        assert!(state.is_loading);
        assert!(state.load_error.is_none());

        state.series_loaded(state.fetches, build_series(&[order("2026-08-26T10:00:00Z", "4.00")]));
        assert_eq!(state.points.len(), 1);
        assert!(!state.is_loading);
    }
}
