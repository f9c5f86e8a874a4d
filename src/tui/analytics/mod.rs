//! Analytics screen: revenue points for a selectable date range.

mod model;
mod view;

pub use model::{AnalyticsState, DateRange, SeriesPoint, build_series};
pub use view::AnalyticsScreen;
