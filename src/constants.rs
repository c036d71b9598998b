//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Hotel SEO Scanner";

/// Number of listings fabricated per scan.
pub const LISTINGS_PER_SCAN: usize = 8;

/// Delay between scan progress steps.
pub const SCAN_STEP_MILLIS: u64 = 600;

/// Fixed scan progress sequence: (progress %, status message).
pub const SCAN_STEPS: &[(u8, &str)] = &[
    (15, "Connecting to Brønnøysundregistrene..."),
    (30, "Fetching hospitality businesses..."),
    (45, "Extracting financial data..."),
    (60, "Analyzing website SEO..."),
    (75, "Calculating opportunity scores..."),
    (90, "Compiling results..."),
    (100, "Scan complete!"),
];

// Revenue filter bounds (NOK)
pub const MIN_REVENUE_FLOOR: i64 = 1_000_000;
pub const MIN_REVENUE_CEIL: i64 = 20_000_000;
pub const MIN_REVENUE_STEP: i64 = 1_000_000;
pub const DEFAULT_MIN_REVENUE: i64 = 5_000_000;

// Equity ratio filter bounds (%)
pub const MIN_EQUITY_FLOOR: u8 = 10;
pub const MIN_EQUITY_CEIL: u8 = 70;
pub const MIN_EQUITY_STEP: u8 = 5;
pub const DEFAULT_MIN_EQUITY: u8 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_steps_progress_strictly_increasing_to_complete() {
        let mut last = 0u8;
        for &(progress, message) in SCAN_STEPS {
            assert!(progress > last, "progress must increase: {}", progress);
            assert!(!message.is_empty());
            last = progress;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn filter_bounds_contain_defaults() {
        assert!((MIN_REVENUE_FLOOR..=MIN_REVENUE_CEIL).contains(&DEFAULT_MIN_REVENUE));
        assert!((MIN_EQUITY_FLOOR..=MIN_EQUITY_CEIL).contains(&DEFAULT_MIN_EQUITY));
    }
}
