//! Property-based tests for bin generation invariants.
//!
//! These tests verify properties that should hold for every well-formed
//! request:
//! - Bins within a container are strictly ordered and non-overlapping
//! - Containers are strictly ordered across the result
//! - Continuous minute bins tile the requested range with no gaps
//! - Recurring minute bins respect the weekday and time-of-day filters

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;

use timebin_core::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn base_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A start timestamp within a few years of the base date, at minute
/// resolution.
fn start_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..1500, 0i64..1440)
        .prop_map(|(days, minutes)| base_date() + Duration::days(days) + Duration::minutes(minutes))
}

fn granularity_strategy() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::FifteenMinutes),
        Just(Granularity::ThirtyMinutes),
        Just(Granularity::Hour),
        Just(Granularity::Day),
        Just(Granularity::Week),
        Just(Granularity::Month),
        Just(Granularity::Year),
    ]
}

/// Time-of-day fields with a non-empty window (start strictly before end).
fn window_strategy() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (0u32..1439, 1u32..1440)
        .prop_map(|(a, b)| {
            let (lo, hi) = if a < b { (a, b) } else { (b, a + 1) };
            (lo / 60, lo % 60, hi / 60, hi % 60)
        })
}

/// Any subset of the seven weekdays, chosen by bitmask.
fn weekdays_strategy() -> impl Strategy<Value = Vec<Weekday>> {
    (0u8..128).prop_map(|mask| {
        ALL_WEEKDAYS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, day)| *day)
            .collect()
    })
}

fn options_strategy() -> impl Strategy<Value = BinOptions> {
    (
        start_strategy(),
        0i64..120,
        0i64..1440,
        granularity_strategy(),
        any::<bool>(),
        window_strategy(),
        weekdays_strategy(),
    )
        .prop_map(|(start, days, minutes, granularity, recurring, window, weekdays)| {
            let end = start + Duration::days(days) + Duration::minutes(minutes);
            let mut options = BinOptions::new(start, end, granularity)
                .with_time_of_day(window.0, window.1, window.2, window.3)
                .with_days_of_week(weekdays);
            if recurring {
                options = options.with_mode(BinMode::RecurringPeriod);
            }
            options
        })
}

// =============================================================================
// INVARIANTS
// =============================================================================

fn assert_strictly_ordered(containers: &[BinContainer]) {
    for container in containers {
        for bin in container.bins() {
            assert!(bin.start < bin.end, "bin has non-positive width: {bin}");
        }
        for pair in container.bins().windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "overlapping bins: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }
    let firsts: Vec<NaiveDateTime> = containers
        .iter()
        .filter_map(|c| c.bins().first().map(|b| b.start))
        .collect();
    for pair in firsts.windows(2) {
        assert!(pair[0] < pair[1], "containers out of order");
    }
}

proptest! {
    #[test]
    fn bins_are_ordered_and_non_overlapping(options in options_strategy()) {
        let containers = generate_bins(&options).unwrap();
        assert_strictly_ordered(&containers);
    }

    #[test]
    fn continuous_minute_bins_tile_the_range(
        start in start_strategy(),
        minutes in 1i64..20_000,
        granularity in prop_oneof![
            Just(Granularity::FifteenMinutes),
            Just(Granularity::ThirtyMinutes),
            Just(Granularity::Hour),
        ],
    ) {
        let end = start + Duration::minutes(minutes);
        let options = BinOptions::new(start, end, granularity);

        let containers = generate_bins(&options).unwrap();
        prop_assert_eq!(containers.len(), 1);

        let bins = containers[0].bins();
        let width = granularity.width_minutes().unwrap();
        prop_assert!(!bins.is_empty());
        prop_assert_eq!(bins[0].start, start);
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        for bin in bins {
            prop_assert_eq!(bin.duration_minutes(), width);
        }
        // the final bin reaches the end, overrunning by less than one width
        let last = bins[bins.len() - 1];
        prop_assert!(last.end >= end);
        prop_assert!(last.start < end);
    }

    #[test]
    fn recurring_minute_bins_respect_both_filters(
        start in start_strategy(),
        minutes in 1i64..20_000,
        window in window_strategy(),
        weekdays in weekdays_strategy(),
    ) {
        let end = start + Duration::minutes(minutes);
        let options = BinOptions::new(start, end, Granularity::FifteenMinutes)
            .with_mode(BinMode::RecurringPeriod)
            .with_time_of_day(window.0, window.1, window.2, window.3)
            .with_days_of_week(weekdays.clone());

        let containers = generate_bins(&options).unwrap();
        let resolved = options.required_window().unwrap();
        for bin in containers[0].bins() {
            prop_assert!(weekdays.contains(&bin.start.weekday()));
            prop_assert!(resolved.contains(bin.start.time()));
        }
    }

    #[test]
    fn recurring_month_containers_are_calendar_bounded(
        start in start_strategy(),
        days in 0i64..200,
        window in window_strategy(),
        weekdays in weekdays_strategy(),
    ) {
        let end = start + Duration::days(days);
        let options = BinOptions::new(start, end, Granularity::Month)
            .with_mode(BinMode::RecurringPeriod)
            .with_time_of_day(window.0, window.1, window.2, window.3)
            .with_days_of_week(weekdays.clone());

        let containers = generate_bins(&options).unwrap();
        prop_assert!(!containers.is_empty());
        for container in &containers {
            let bounds_start = container.start().unwrap();
            let bounds_end = container.end().unwrap();
            prop_assert_eq!(bounds_start.date().day(), 1);
            prop_assert_eq!(bounds_end.date().day(), 1);
            for bin in container.bins() {
                prop_assert!(weekdays.contains(&bin.start.weekday()));
                prop_assert!(bin.start >= bounds_start && bin.end <= bounds_end);
            }
        }
    }
}

// =============================================================================
// DETERMINISTIC CHECKS
// =============================================================================

#[test]
fn serde_round_trips_bin_options() {
    let start = base_date();
    let end = start + Duration::days(7);
    let options = BinOptions::new(start, end, Granularity::Month)
        .with_mode(BinMode::RecurringPeriod)
        .with_time_of_day(8, 0, 17, 0)
        .with_days_of_week(vec![Weekday::Mon, Weekday::Wed]);

    let json = serde_json::to_string(&options).unwrap();
    let back: BinOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn generated_containers_serialize() {
    let start = base_date();
    let options = BinOptions::new(start, start + Duration::days(1), Granularity::Hour);

    let containers = generate_bins(&options).unwrap();
    let json = serde_json::to_string(&containers).unwrap();
    let back: Vec<BinContainer> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, containers);
}
