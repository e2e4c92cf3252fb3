//! Display formatting helpers shared by the table and modal views.

use chrono::{DateTime, Utc};

/// Compact dollar formatting for caps, volume, and liquidity.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${value:.2}")
    }
}

/// Price formatting with more precision for sub-cent tokens.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "n/a".to_string();
    }
    if price >= 1.0 {
        format!("${price:.2}")
    } else if price >= 0.01 {
        format!("${price:.4}")
    } else {
        format!("${price:.8}")
    }
}

/// Relative move between two prices; degenerate ratios are suppressed.
pub fn format_pct_change(previous: f64, current: f64) -> String {
    let ratio = (current - previous) / previous;
    if !ratio.is_finite() {
        return "n/a".to_string();
    }
    format!("{:+.2}%", ratio * 100.0)
}

/// Short age label since launch ("3m", "5h", "12d").
pub fn format_age(launched_at: DateTime<Utc>) -> String {
    let minutes = Utc::now()
        .signed_duration_since(launched_at)
        .num_minutes()
        .max(0);
    if minutes < 1 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m")
    } else if minutes < 1_440 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}d", minutes / 1_440)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn usd_tiers() {
        assert_eq!(format_usd(950.0), "$950.00");
        assert_eq!(format_usd(45_200.0), "$45.2K");
        assert_eq!(format_usd(2_500_000.0), "$2.50M");
        assert_eq!(format_usd(1_200_000_000.0), "$1.20B");
    }

    #[test]
    fn non_finite_values_are_suppressed() {
        assert_eq!(format_usd(f64::NAN), "n/a");
        assert_eq!(format_usd(f64::INFINITY), "n/a");
        assert_eq!(format_price(f64::NAN), "n/a");
    }

    #[test]
    fn price_precision_scales_down() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0423), "$0.0423");
        assert_eq!(format_price(0.00000123), "$0.00000123");
    }

    #[test]
    fn pct_change_guards_division() {
        // Zero previous price would produce inf / NaN ratios.
        assert_eq!(format_pct_change(0.0, 5.0), "n/a");
        assert_eq!(format_pct_change(0.0, 0.0), "n/a");
        assert_eq!(format_pct_change(2.0, 2.1), "+5.00%");
        assert_eq!(format_pct_change(2.0, 1.9), "-5.00%");
    }

    #[test]
    fn age_labels() {
        let now = Utc::now();
        assert_eq!(format_age(now), "now");
        assert_eq!(format_age(now - Duration::minutes(5)), "5m");
        assert_eq!(format_age(now - Duration::hours(3)), "3h");
        assert_eq!(format_age(now - Duration::days(2)), "2d");
    }
}
