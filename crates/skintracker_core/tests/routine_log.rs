use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use skintracker_core::{
    MemoryStore, RoutineCollection, RoutineEntry, RoutineProduct, RoutineTime, StoragePort,
    StoreObserver, ROUTINES_KEY,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn routine(day: u32, time: RoutineTime) -> RoutineEntry {
    RoutineEntry::new(
        date(day),
        time,
        vec![RoutineProduct {
            id: 1,
            name: "Cleanser".to_string(),
            is_used: true,
        }],
        "",
    )
}

#[test]
fn entries_accumulate_without_replacing_same_slot_saves() {
    let store = Arc::new(MemoryStore::new());
    let mut routines = RoutineCollection::load(store);

    routines.create(routine(9, RoutineTime::Morning));
    routines.create(routine(9, RoutineTime::Morning));
    routines.create(routine(9, RoutineTime::Evening));

    // Two morning saves for the same date coexist.
    assert_eq!(routines.list().len(), 3);
    assert_eq!(routines.entries_for_date(date(9)).count(), 3);
    assert_eq!(routines.entries_for_date(date(10)).count(), 0);
}

struct ReloadFlag {
    pending: Mutex<Vec<String>>,
}

impl StoreObserver for ReloadFlag {
    fn on_store_update(&self, key: &str) {
        self.pending.lock().unwrap().push(key.to_string());
    }
}

#[test]
fn change_notification_drives_reload_of_a_second_view() {
    let store = Arc::new(MemoryStore::new());
    let flag = Arc::new(ReloadFlag {
        pending: Mutex::new(Vec::new()),
    });
    store.subscribe(Arc::clone(&flag) as Arc<dyn StoreObserver>);

    let mut writer_view = RoutineCollection::load(Arc::clone(&store));
    let mut reader_view = RoutineCollection::load(Arc::clone(&store));

    writer_view.create(routine(9, RoutineTime::Evening));

    // The reader view refreshes in response to the notification.
    let pending = std::mem::take(&mut *flag.pending.lock().unwrap());
    assert_eq!(pending, vec![ROUTINES_KEY.to_string()]);
    assert!(reader_view.list().is_empty());
    reader_view.reload();
    assert_eq!(reader_view.list().len(), 1);
}
