use chrono::NaiveDate;
use skintracker_core::{
    default_concerns, weekly_summary, RatingTrend, RoutineEntry, RoutineProduct, RoutineTime,
    TrackingDraft, TrackingEntry,
};

// Monday of the reference week used throughout these tests.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    monday() + chrono::Duration::days(offset as i64)
}

fn entry(id: i64, date: NaiveDate, rating: u8, active: &[&str]) -> TrackingEntry {
    let mut concerns = default_concerns();
    for name in active {
        concerns.insert(name.to_string(), true);
    }
    TrackingEntry::with_id(
        id,
        TrackingDraft {
            date,
            skin_rating: rating,
            concerns,
            notes: String::new(),
        },
    )
    .unwrap()
}

fn routine(date: NaiveDate, time: RoutineTime, used: &[&str]) -> RoutineEntry {
    let products = used
        .iter()
        .enumerate()
        .map(|(index, name)| RoutineProduct {
            id: index as i64 + 1,
            name: name.to_string(),
            is_used: true,
        })
        .collect();
    RoutineEntry::new(date, time, products, "")
}

#[test]
fn empty_week_yields_all_zero_summary() {
    let summary = weekly_summary(&[], &[], monday());

    assert_eq!(summary.ratings, [0; 7]);
    assert_eq!(summary.average_rating, 0.0);
    assert_eq!(summary.days_logged, 0);
    assert!(summary.top_concerns.is_empty());
    assert!(summary.most_used_products.is_empty());
    assert_eq!(summary.adherence.overall, 0);
    assert_eq!(summary.adherence.morning, 0);
    assert_eq!(summary.adherence.evening, 0);
    assert_eq!(summary.trend, RatingTrend::Stable);
}

#[test]
fn average_divides_by_logged_days_not_seven() {
    // Three entries summing to 9: average must be 3.0, not 9/7.
    let tracking = vec![
        entry(1, day(0), 4, &[]),
        entry(2, day(2), 2, &[]),
        entry(3, day(5), 3, &[]),
    ];

    let summary = weekly_summary(&tracking, &[], monday());
    assert_eq!(summary.average_rating, 3.0);
    assert_eq!(summary.days_logged, 3);
}

#[test]
fn ratings_land_in_weekday_slots_monday_first() {
    let tracking = vec![entry(1, day(2), 5, &[]), entry(2, day(6), 1, &[])];

    let summary = weekly_summary(&tracking, &[], monday());
    assert_eq!(summary.ratings, [0, 0, 5, 0, 0, 0, 1]);
}

#[test]
fn entries_outside_the_week_are_ignored() {
    let before = monday() - chrono::Duration::days(1);
    let after = day(7);
    let tracking = vec![entry(1, before, 5, &[]), entry(2, after, 5, &[])];

    let summary = weekly_summary(&tracking, &[], monday());
    assert_eq!(summary.ratings, [0; 7]);
    assert_eq!(summary.days_logged, 0);
}

#[test]
fn adherence_percentages_round_to_nearest_integer() {
    // Morning on 3 of 7 days, evening on 5 of 7.
    let mut routines = Vec::new();
    for offset in [0, 2, 4] {
        routines.push(routine(day(offset), RoutineTime::Morning, &[]));
    }
    for offset in [0, 1, 2, 3, 4] {
        routines.push(routine(day(offset), RoutineTime::Evening, &[]));
    }

    let summary = weekly_summary(&[], &routines, monday());
    assert_eq!(summary.adherence.morning, 43); // round(3/7*100)
    assert_eq!(summary.adherence.evening, 71); // round(5/7*100)
    assert_eq!(summary.adherence.overall, 57); // round(8/14*100)

    let flags: Vec<(bool, bool)> = summary
        .adherence
        .completed_days
        .iter()
        .map(|completion| (completion.morning, completion.evening))
        .collect();
    assert_eq!(
        flags,
        vec![
            (true, true),
            (false, true),
            (true, true),
            (false, true),
            (true, true),
            (false, false),
            (false, false),
        ]
    );
}

#[test]
fn trend_is_stable_when_previous_week_has_no_data() {
    let tracking = vec![entry(1, day(0), 5, &[])];
    let summary = weekly_summary(&tracking, &[], monday());
    assert_eq!(summary.trend, RatingTrend::Stable);
}

#[test]
fn trend_follows_previous_week_average() {
    let prev_day = monday() - chrono::Duration::days(7);
    let tracking = vec![entry(1, prev_day, 2, &[]), entry(2, day(0), 4, &[])];
    assert_eq!(
        weekly_summary(&tracking, &[], monday()).trend,
        RatingTrend::Up
    );

    let tracking = vec![entry(1, prev_day, 4, &[]), entry(2, day(0), 2, &[])];
    assert_eq!(
        weekly_summary(&tracking, &[], monday()).trend,
        RatingTrend::Down
    );

    let tracking = vec![entry(1, prev_day, 3, &[]), entry(2, day(0), 3, &[])];
    assert_eq!(
        weekly_summary(&tracking, &[], monday()).trend,
        RatingTrend::Stable
    );
}

#[test]
fn top_concerns_rank_by_count_with_stable_ties() {
    let tracking = vec![
        entry(1, day(0), 3, &["redness", "acne"]),
        entry(2, day(1), 3, &["acne"]),
        entry(3, day(2), 3, &["dryness", "oiliness", "sensitivity"]),
    ];

    let summary = weekly_summary(&tracking, &[], monday());
    // acne twice; the four singles tie and keep first-encountered order
    // (entries in list order, concern keys alphabetical within an entry).
    assert_eq!(summary.top_concerns, vec!["acne", "redness", "dryness"]);
}

#[test]
fn most_used_products_count_checked_rows_and_truncate_to_three() {
    let mut routines = Vec::new();
    for offset in 0..3 {
        routines.push(routine(day(offset), RoutineTime::Morning, &["Cleanser"]));
    }
    for offset in 0..2 {
        routines.push(routine(day(offset), RoutineTime::Evening, &["Serum"]));
    }
    routines.push(routine(day(3), RoutineTime::Morning, &["Toner"]));
    routines.push(routine(day(4), RoutineTime::Morning, &["Sunscreen"]));

    // An unchecked row must not count.
    let mut skipped = routine(day(5), RoutineTime::Morning, &[]);
    skipped.products.push(RoutineProduct {
        id: 99,
        name: "Mask".to_string(),
        is_used: false,
    });
    routines.push(skipped);

    let summary = weekly_summary(&[], &routines, monday());
    let ranked: Vec<(&str, u32)> = summary
        .most_used_products
        .iter()
        .map(|usage| (usage.name.as_str(), usage.days_used))
        .collect();
    assert_eq!(ranked, vec![("Cleanser", 3), ("Serum", 2), ("Toner", 1)]);
}

#[test]
fn anchor_anywhere_in_week_selects_same_interval() {
    let tracking = vec![entry(1, day(0), 4, &[])];

    let from_monday = weekly_summary(&tracking, &[], monday());
    let from_sunday = weekly_summary(&tracking, &[], day(6));
    assert_eq!(from_monday, from_sunday);
}
