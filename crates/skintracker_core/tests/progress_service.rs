use std::sync::Arc;

use chrono::NaiveDate;
use skintracker_core::{
    default_concerns, MemoryStore, ProgressService, RoutineCollection, RoutineEntry,
    RoutineProduct, RoutineTime, TrackingCollection, TrackingDraft,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

#[test]
fn summary_reflects_current_store_state() {
    let store = Arc::new(MemoryStore::new());
    let mut tracking = TrackingCollection::load(Arc::clone(&store));
    let mut routines = RoutineCollection::load(Arc::clone(&store));

    // 2026-03-11 is a Wednesday inside the 03-09..03-15 week.
    let today = date(11);
    let service = ProgressService::new(Arc::clone(&store), today);

    let empty = service.summary();
    assert_eq!(empty.average_rating, 0.0);

    tracking
        .create(TrackingDraft {
            date: date(11),
            skin_rating: 4,
            concerns: default_concerns(),
            notes: String::new(),
        })
        .unwrap();
    routines.create(RoutineEntry::new(
        date(11),
        RoutineTime::Morning,
        vec![RoutineProduct {
            id: 1,
            name: "Cleanser".to_string(),
            is_used: true,
        }],
        "",
    ));

    // No reload step needed: the service reads fresh on every call.
    let summary = service.summary();
    assert_eq!(summary.average_rating, 4.0);
    assert_eq!(summary.ratings[2], 4); // Wednesday slot
    assert_eq!(summary.adherence.morning, 14); // round(1/7*100)
    assert_eq!(summary.most_used_products[0].name, "Cleanser");
}

#[test]
fn week_navigation_clamps_at_today() {
    let store = Arc::new(MemoryStore::new());
    let today = date(11);
    let mut service = ProgressService::new(store, today);

    let (start, end) = service.week_bounds();
    assert_eq!(start, date(9));
    assert_eq!(end, date(15));

    // Already on the current week: cannot move forward.
    assert!(!service.next_week(today));
    assert_eq!(service.anchor(), today);

    service.previous_week();
    assert_eq!(service.anchor(), date(4));
    let (start, _) = service.week_bounds();
    assert_eq!(start, date(2));

    assert!(service.next_week(today));
    assert_eq!(service.anchor(), date(11));
    assert!(!service.next_week(today));
}
