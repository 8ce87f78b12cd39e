//! Currency and date formatting for display.

use chrono::{Datelike, NaiveDate};

/// Symbol used when the configuration does not override it.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Renders `amount` with two decimals behind `symbol`, e.g. `₱1234.50` or `-₱12.00`.
pub fn format_currency_value(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{:.2}", amount.abs())
}

/// Renders a date the way the dashboard shows it, e.g. `Jan 5, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_label(date.month()),
        date.day(),
        date.year()
    )
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_two_decimals() {
        assert_eq!(format_currency_value(1234.5, "₱"), "₱1234.50");
        assert_eq!(format_currency_value(0.0, "$"), "$0.00");
        assert_eq!(format_currency_value(-12.0, "₱"), "-₱12.00");
    }

    #[test]
    fn formats_medium_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2025");
    }

    #[test]
    fn parses_only_iso_dates() {
        assert_eq!(
            parse_iso_date(" 2025-01-31 "),
            NaiveDate::from_ymd_opt(2025, 1, 31)
        );
        assert!(parse_iso_date("31/01/2025").is_none());
        assert!(parse_iso_date("2025-02-30").is_none());
    }
}
