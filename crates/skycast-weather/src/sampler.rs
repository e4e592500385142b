//! Reduce the 3-hourly forecast feed to one reading per day.

use crate::types::{DailySample, ForecastEntry};

/// Number of days shown in the forecast strip
pub const MAX_FORECAST_DAYS: usize = 5;

/// Time-of-day part of `dt_txt` that represents a day
pub const MIDDAY_SLOT: &str = "12:00:00";

/// Pick the midday reading of each day, at most five, in feed order.
///
/// Days without a midday reading (typically a partial last day) are skipped.
/// An empty or unrecognisable feed yields an empty list.
pub fn sample(series: &[ForecastEntry]) -> Vec<DailySample> {
    sample_with_limit(series, MAX_FORECAST_DAYS)
}

/// Same as [`sample`] with an explicit day limit.
pub fn sample_with_limit(series: &[ForecastEntry], days: usize) -> Vec<DailySample> {
    series
        .iter()
        .filter(|entry| is_midday_slot(&entry.dt_txt))
        .filter_map(DailySample::from_entry)
        .take(days)
        .collect()
}

/// True when a "YYYY-MM-DD HH:MM:SS" string falls on the midday slot.
pub fn is_midday_slot(dt_txt: &str) -> bool {
    dt_txt
        .trim()
        .split_once(' ')
        .is_some_and(|(_, time)| time.trim() == MIDDAY_SLOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Condition;
    use chrono::NaiveDate;

    const DAY_SECS: i64 = 86_400;
    // 2024-06-16 00:00:00 UTC
    const START: i64 = 1_718_496_000;

    fn entry(dt: i64) -> ForecastEntry {
        let ts = chrono::DateTime::from_timestamp(dt, 0).unwrap();
        ForecastEntry {
            dt,
            dt_txt: ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            temperature: 10.0 + (dt - START) as f64 / DAY_SECS as f64,
            condition: Condition {
                description: "clear sky".into(),
                icon: "01d".into(),
            },
        }
    }

    /// Full 3-hourly feed for `days` days starting at START.
    fn feed(days: i64) -> Vec<ForecastEntry> {
        (0..days * 8).map(|i| entry(START + i * 3 * 3600)).collect()
    }

    fn dates(samples: &[DailySample]) -> Vec<NaiveDate> {
        samples.iter().map(DailySample::date).collect()
    }

    #[test]
    fn empty_series_yields_nothing() {
        assert!(sample(&[]).is_empty());
    }

    #[test]
    fn one_sample_per_day_in_order() {
        for days in 1..=5 {
            let result = sample(&feed(days));
            assert_eq!(result.len(), days as usize);
            assert!(result.iter().all(|s| s.dt_txt.ends_with(MIDDAY_SLOT)));
            let d = dates(&result);
            assert!(d.windows(2).all(|w| w[0] < w[1]), "not ascending: {d:?}");
        }
    }

    #[test]
    fn more_than_five_days_keeps_first_five() {
        let result = sample(&feed(7));
        assert_eq!(result.len(), 5);
        assert_eq!(
            dates(&result).first().copied(),
            NaiveDate::from_ymd_opt(2024, 6, 16)
        );
        assert_eq!(
            dates(&result).last().copied(),
            NaiveDate::from_ymd_opt(2024, 6, 20)
        );
    }

    #[test]
    fn day_without_midday_is_omitted() {
        // Drop day two's midday reading
        let skipped = START + DAY_SECS + 12 * 3600;
        let series: Vec<_> = feed(3).into_iter().filter(|e| e.dt != skipped).collect();

        let result = sample(&series);

        assert_eq!(
            dates(&result),
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 18).unwrap(),
            ]
        );
    }

    #[test]
    fn partial_final_day_before_midday_is_omitted() {
        // Typical live feed: starts mid-afternoon, ends before midday on day six
        let series: Vec<_> = feed(6)
            .into_iter()
            .filter(|e| e.dt >= START + 15 * 3600 && e.dt < START + 5 * DAY_SECS + 9 * 3600)
            .collect();

        let result = sample(&series);

        assert_eq!(result.len(), 4);
        assert_eq!(
            dates(&result)[0],
            NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()
        );
    }

    #[test]
    fn malformed_timestamps_yield_nothing() {
        let mut series = feed(2);
        for e in &mut series {
            e.dt_txt = "garbage".into();
        }
        assert!(sample(&series).is_empty());
    }

    #[test]
    fn limit_is_configurable() {
        assert_eq!(sample_with_limit(&feed(5), 3).len(), 3);
        assert!(sample_with_limit(&feed(5), 0).is_empty());
    }

    #[test]
    fn midday_slot_detection() {
        assert!(is_midday_slot("2024-06-16 12:00:00"));
        assert!(!is_midday_slot("2024-06-16 15:00:00"));
        assert!(!is_midday_slot("12:00:00"));
        assert!(!is_midday_slot(""));
    }
}
