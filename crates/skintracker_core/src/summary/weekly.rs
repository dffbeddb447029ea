//! Weekly progress aggregation.
//!
//! # Responsibility
//! - Map the tracking and routine collections plus an anchor date to one
//!   `WeeklySummary`.
//! - Own the week math (Monday-start weeks, previous-week trend window).
//!
//! # Invariants
//! - A rating slot of 0 means "no data", never a valid rating.
//! - `average_rating` averages non-zero slots only.
//! - Ranking ties break by first-encountered order: entries in list order,
//!   each entry's concern map in key order.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::routine::{RoutineEntry, RoutineTime};
use crate::model::tracking::TrackingEntry;

/// Slots in the per-week rating sequence, Monday through Sunday.
pub const DAYS_PER_WEEK: usize = 7;

/// Entries kept in the top-concern and most-used-product rankings.
const TOP_RANKED: usize = 3;

/// Direction of this week's average rating against the previous week's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTrend {
    Up,
    Down,
    /// Also covers weeks with no previous data to compare against.
    Stable,
}

/// Routine existence flags for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCompletion {
    pub date: NaiveDate,
    pub morning: bool,
    pub evening: bool,
}

/// Adherence percentages and the per-day flags behind them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineAdherence {
    /// `round((morning_days + evening_days) / 14 * 100)`.
    pub overall: u8,
    pub morning: u8,
    pub evening: u8,
    /// One element per weekday, Monday first.
    pub completed_days: Vec<DayCompletion>,
}

/// One ranked product in the most-used list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUsage {
    pub name: String,
    /// Routine saves where the product was checked as used.
    pub days_used: u32,
}

/// Derived weekly progress view. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    /// Rating per weekday slot, Monday first; 0 means no entry.
    pub ratings: [u8; DAYS_PER_WEEK],
    pub adherence: RoutineAdherence,
    /// Up to three concern names ranked by activation count.
    pub top_concerns: Vec<String>,
    /// Distinct days of the week with a tracking entry.
    pub days_logged: usize,
    /// Up to three products ranked by checked-usage count.
    pub most_used_products: Vec<ProductUsage>,
    /// Mean of non-zero rating slots; 0.0 when the week is empty.
    pub average_rating: f64,
    pub trend: RatingTrend,
}

/// Returns the Monday starting the week that contains `anchor`.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(i64::from(anchor.weekday().num_days_from_monday()))
}

/// Returns the inclusive Monday..Sunday interval containing `anchor`.
pub fn week_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(anchor);
    (start, start + Duration::days(6))
}

/// Computes the weekly summary for the week containing `anchor`.
///
/// Pure function of its inputs; cheap enough (bounded by week size) to run
/// unconditionally on every collection or anchor change.
pub fn weekly_summary(
    tracking: &[TrackingEntry],
    routines: &[RoutineEntry],
    anchor: NaiveDate,
) -> WeeklySummary {
    let (start, end) = week_bounds(anchor);
    let (prev_start, prev_end) = week_bounds(start - Duration::days(7));

    let week_entries: Vec<&TrackingEntry> = tracking
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= end)
        .collect();

    // Later entries for the same day overwrite the slot; the create path
    // keeps dates unique, but the edit path can violate that.
    let mut ratings = [0u8; DAYS_PER_WEEK];
    let mut logged = [false; DAYS_PER_WEEK];
    for entry in &week_entries {
        let slot = entry.date.weekday().num_days_from_monday() as usize;
        ratings[slot] = entry.skin_rating;
        logged[slot] = true;
    }
    let days_logged = logged.iter().filter(|seen| **seen).count();

    let mut concern_tally = RankedTally::new();
    for entry in &week_entries {
        for (name, active) in &entry.concerns {
            if *active {
                concern_tally.bump(name);
            }
        }
    }
    let top_concerns = concern_tally
        .into_top(TOP_RANKED)
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    let week_routines: Vec<&RoutineEntry> = routines
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= end)
        .collect();

    let mut usage_tally = RankedTally::new();
    for routine in &week_routines {
        for product in routine.used_products() {
            usage_tally.bump(&product.name);
        }
    }
    let most_used_products = usage_tally
        .into_top(TOP_RANKED)
        .into_iter()
        .map(|(name, count)| ProductUsage {
            name,
            days_used: count,
        })
        .collect();

    let completed_days: Vec<DayCompletion> = (0..DAYS_PER_WEEK as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DayCompletion {
                date,
                morning: has_routine_on(routines, date, RoutineTime::Morning),
                evening: has_routine_on(routines, date, RoutineTime::Evening),
            }
        })
        .collect();

    let morning_days = completed_days.iter().filter(|day| day.morning).count();
    let evening_days = completed_days.iter().filter(|day| day.evening).count();
    let adherence = RoutineAdherence {
        overall: percent(morning_days + evening_days, DAYS_PER_WEEK * 2),
        morning: percent(morning_days, DAYS_PER_WEEK),
        evening: percent(evening_days, DAYS_PER_WEEK),
        completed_days,
    };

    let average_rating = mean_nonzero(&ratings);
    let previous_average = mean_of_entries(tracking, prev_start, prev_end);

    let trend = if average_rating > previous_average && previous_average > 0.0 {
        RatingTrend::Up
    } else if average_rating < previous_average && previous_average > 0.0 {
        RatingTrend::Down
    } else {
        RatingTrend::Stable
    };

    WeeklySummary {
        ratings,
        adherence,
        top_concerns,
        days_logged,
        most_used_products,
        average_rating,
        trend,
    }
}

fn has_routine_on(routines: &[RoutineEntry], date: NaiveDate, time: RoutineTime) -> bool {
    routines
        .iter()
        .any(|entry| entry.time == time && entry.date == date)
}

fn percent(part: usize, whole: usize) -> u8 {
    ((part as f64 / whole as f64) * 100.0).round() as u8
}

fn mean_nonzero(ratings: &[u8; DAYS_PER_WEEK]) -> f64 {
    let valid: Vec<u8> = ratings.iter().copied().filter(|r| *r > 0).collect();
    if valid.is_empty() {
        return 0.0;
    }
    f64::from(valid.iter().map(|r| u32::from(*r)).sum::<u32>()) / valid.len() as f64
}

/// Mean rating over every entry inside the interval; 0.0 when empty.
fn mean_of_entries(tracking: &[TrackingEntry], start: NaiveDate, end: NaiveDate) -> f64 {
    let ratings: Vec<u8> = tracking
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= end)
        .map(|entry| entry.skin_rating)
        .collect();
    if ratings.is_empty() {
        return 0.0;
    }
    f64::from(ratings.iter().map(|r| u32::from(*r)).sum::<u32>()) / ratings.len() as f64
}

/// Frequency tally that remembers first-encountered order for tie-breaks.
struct RankedTally {
    counts: Vec<(String, u32)>,
}

impl RankedTally {
    fn new() -> Self {
        Self { counts: Vec::new() }
    }

    fn bump(&mut self, name: &str) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(existing, _)| existing == name) {
            *count += 1;
        } else {
            self.counts.push((name.to_string(), 1));
        }
    }

    /// Ranks by count descending; the stable sort keeps first-encountered
    /// order among equal counts.
    fn into_top(mut self, limit: usize) -> Vec<(String, u32)> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.truncate(limit);
        self.counts
    }
}
