//! Daily routine domain model.
//!
//! # Responsibility
//! - Define the routine record logged per date and time of day.
//!
//! # Invariants
//! - Routine entries are append-only; there is no edit or delete path.
//! - A routine references products by id and name with no foreign-key
//!   enforcement against the inventory collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Time of day a routine belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineTime {
    Morning,
    Evening,
}

/// One product checkbox row inside a routine entry.
///
/// Snapshot of the product at log time; deleting the product later does
/// not cascade into recorded routines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineProduct {
    pub id: RecordId,
    pub name: String,
    pub is_used: bool,
}

/// One saved routine for a specific date and time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineEntry {
    /// Calendar date the routine was logged for, ISO-8601 on the wire.
    pub date: NaiveDate,
    pub time: RoutineTime,
    pub products: Vec<RoutineProduct>,
    #[serde(default)]
    pub notes: String,
}

impl RoutineEntry {
    pub fn new(
        date: NaiveDate,
        time: RoutineTime,
        products: Vec<RoutineProduct>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time,
            products,
            notes: notes.into(),
        }
    }

    /// Returns the names of products checked as used.
    pub fn used_products(&self) -> impl Iterator<Item = &RoutineProduct> {
        self.products.iter().filter(|product| product.is_used)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{RoutineEntry, RoutineProduct, RoutineTime};

    #[test]
    fn used_products_filters_unchecked_rows() {
        let entry = RoutineEntry::new(
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            RoutineTime::Morning,
            vec![
                RoutineProduct {
                    id: 1,
                    name: "Cleanser".to_string(),
                    is_used: true,
                },
                RoutineProduct {
                    id: 2,
                    name: "Toner".to_string(),
                    is_used: false,
                },
            ],
            "",
        );

        let used: Vec<&str> = entry.used_products().map(|p| p.name.as_str()).collect();
        assert_eq!(used, vec!["Cleanser"]);
    }

    #[test]
    fn time_serializes_lowercase() {
        let json = serde_json::to_value(RoutineTime::Evening).unwrap();
        assert_eq!(json, "evening");
    }
}
