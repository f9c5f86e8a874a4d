//! Human-readable formatting for timestamps and money.

use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Format an order timestamp for the orders table, e.g. "Monday at 03:15 PM".
/// Falls back to the raw string if the timestamp does not parse.
pub fn format_order_date(iso: &str) -> String {
    match iso.parse::<Timestamp>() {
        Ok(ts) => ts
            .to_zoned(TimeZone::system())
            .strftime("%A at %I:%M %p")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Format a timestamp as an analytics point label,
/// e.g. "August 27, 2026 3:15 PM".
pub fn format_point_label(iso: &str) -> String {
    match iso.parse::<Timestamp>() {
        Ok(ts) => ts
            .to_zoned(TimeZone::system())
            .strftime("%B %-d, %Y %-I:%M %p")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Left-pad a decimal amount so lexicographic order matches numeric order
/// for sort keys. Non-numeric input sorts before everything else.
pub fn sortable_amount(amount: &str) -> String {
    match amount.parse::<f64>() {
        Ok(value) => format!("{:018.4}", value),
        Err(_) => format!("{:>18}", amount),
    }
}

/// Sort key for order names like "#1042": zero-pad the number so "#999"
/// sorts before "#1000". Names without a usable number sort by text.
pub fn sortable_order_name(name: &str) -> String {
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u64>() {
        Ok(number) => format!("{:012}", number),
        Err(_) => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_order_date_falls_back_on_garbage() {
        assert_eq!(format_order_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_point_label_falls_back_on_garbage() {
        assert_eq!(format_point_label(""), "");
    }

    #[test]
    fn test_sortable_amount_orders_numerically() {
        let small = sortable_amount("9.50");
        let large = sortable_amount("100.00");
        assert!(small < large);
    }

    #[test]
    fn test_sortable_amount_non_numeric() {
        let bad = sortable_amount("n/a");
        let good = sortable_amount("1.00");
        assert_ne!(bad, good);
    }

    #[test]
    fn test_sortable_order_name_is_numeric() {
        assert!(sortable_order_name("#999") < sortable_order_name("#1000"));
        assert_eq!(sortable_order_name("Draft order"), "draft order");
    }
}
