use contracts::domain::stuff::Stuff;
use std::cmp::Ordering;

use crate::shared::date_utils::compare_timestamps;
use crate::shared::list_utils::{contains_ci, Searchable, Sortable};

pub mod api;
pub mod ui;

impl Searchable for Stuff {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.id, filter)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.stuff_type)
    }
}

impl Sortable for Stuff {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "stock" => self.available().cmp(&other.available()),
            "updated" => compare_timestamps(
                self.updated_at.as_deref().or(self.created_at.as_deref()),
                other.updated_at.as_deref().or(other.created_at.as_deref()),
            ),
            _ => Ordering::Equal,
        }
    }
}

/// Stock level classification driving the badge in the items table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StuffStatus {
    NoRecord,
    OutOfStock,
    LowStock,
    Available,
}

const LOW_STOCK_THRESHOLD: i64 = 5;

impl StuffStatus {
    pub fn of(stuff: &Stuff) -> Self {
        match &stuff.stuff_stock {
            None => StuffStatus::NoRecord,
            Some(stock) if stock.total_available <= 0 => StuffStatus::OutOfStock,
            Some(stock) if stock.total_available <= LOW_STOCK_THRESHOLD => StuffStatus::LowStock,
            Some(_) => StuffStatus::Available,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StuffStatus::NoRecord => "No stock record",
            StuffStatus::OutOfStock => "Out of stock",
            StuffStatus::LowStock => "Low stock",
            StuffStatus::Available => "Available",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StuffStatus::NoRecord => "badge badge--secondary",
            StuffStatus::OutOfStock => "badge badge--danger",
            StuffStatus::LowStock => "badge badge--warning",
            StuffStatus::Available => "badge badge--success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::stuff::StuffStock;

    fn stuff(name: &str, stock: Option<(i64, i64)>) -> Stuff {
        Stuff {
            id: format!("id-{}", name),
            name: name.to_string(),
            stuff_type: "Lab".to_string(),
            stuff_stock: stock.map(|(a, d)| StuffStock {
                total_available: a,
                total_defec: d,
            }),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(StuffStatus::of(&stuff("a", None)), StuffStatus::NoRecord);
        assert_eq!(
            StuffStatus::of(&stuff("b", Some((0, 2)))),
            StuffStatus::OutOfStock
        );
        assert_eq!(
            StuffStatus::of(&stuff("c", Some((5, 0)))),
            StuffStatus::LowStock
        );
        assert_eq!(
            StuffStatus::of(&stuff("d", Some((6, 0)))),
            StuffStatus::Available
        );
    }

    #[test]
    fn search_matches_name_and_id_case_insensitively() {
        let item = stuff("Projector", None);
        assert!(item.matches_filter("proj"));
        assert!(item.matches_filter("ID-PROJ"));
        assert!(!item.matches_filter("chair"));
    }

    #[test]
    fn name_sort_ignores_case() {
        let a = stuff("apple", None);
        let b = stuff("Banana", None);
        assert_eq!(a.compare_by_field(&b, "name"), Ordering::Less);
    }

    #[test]
    fn stock_sort_treats_missing_record_as_zero() {
        let none = stuff("a", None);
        let some = stuff("b", Some((3, 0)));
        assert_eq!(none.compare_by_field(&some, "stock"), Ordering::Less);
    }

    #[test]
    fn updated_sort_falls_back_to_created_at() {
        let mut older = stuff("a", None);
        older.created_at = Some("2024-01-05T00:00:00Z".to_string());
        let mut newer = stuff("b", None);
        newer.updated_at = Some("2024-01-06T00:00:00Z".to_string());
        assert_eq!(older.compare_by_field(&newer, "updated"), Ordering::Less);
    }
}
