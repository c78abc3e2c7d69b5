use contracts::domain::lending::Lending;
use std::cmp::Ordering;

use crate::shared::date_utils::compare_timestamps;
use crate::shared::list_utils::{contains_ci, Searchable, Sortable};

pub mod api;
pub mod ui;

impl Searchable for Lending {
    fn matches_filter(&self, filter: &str) -> bool {
        self.stuff_name()
            .map(|name| contains_ci(name, filter))
            .unwrap_or(false)
            || contains_ci(&self.name, filter)
            || contains_ci(&self.id, filter)
    }

    /// Status filter value, matching the page's dropdown options.
    fn category(&self) -> Option<&str> {
        Some(if self.is_returned() {
            "returned"
        } else {
            "borrowed"
        })
    }
}

impl Sortable for Lending {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => compare_timestamps(self.timestamp(), other.timestamp()),
            "name" => {
                let a = self.stuff_name().unwrap_or("").to_lowercase();
                let b = other.stuff_name().unwrap_or("").to_lowercase();
                a.cmp(&b)
            }
            "borrower" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

/// Parse the return-split drafts. Junk input gets its own message instead
/// of falling through to the sum check.
pub fn parse_return_split(good: &str, defective: &str) -> Result<(i64, i64), String> {
    match (good.trim().parse::<i64>(), defective.trim().parse::<i64>()) {
        (Ok(good), Ok(defective)) => Ok((good, defective)),
        _ => Err("Enter a whole number for both fields".to_string()),
    }
}

/// Check the good/defective split against the borrowed quantity before the
/// request goes out. The message names both numbers so the user can see
/// what to fix.
pub fn validate_return(good: i64, defective: i64, borrowed: i64) -> Result<(), String> {
    if good < 0 || defective < 0 {
        return Err("Quantities cannot be negative".to_string());
    }
    let submitted = good + defective;
    if submitted != borrowed {
        return Err(format!(
            "Good and defective must add up to {} borrowed items, got {}",
            borrowed, submitted
        ));
    }
    Ok(())
}

/// Complement of one return field against the borrowed total, used to
/// auto-fill the other field as the user types. Clamped so the pair never
/// goes negative.
pub fn complement_return_field(entered: i64, borrowed: i64) -> i64 {
    (borrowed - entered.clamp(0, borrowed)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::restoration::Restoration;
    use contracts::domain::stuff::Stuff;

    fn lending(id: &str, borrower: &str, stuff_name: Option<&str>, returned: bool) -> Lending {
        Lending {
            id: id.to_string(),
            stuff_id: None,
            stuff: stuff_name.map(|n| Stuff {
                id: format!("s-{}", n),
                name: n.to_string(),
                stuff_type: "Lab".to_string(),
                stuff_stock: None,
                created_at: None,
                updated_at: None,
            }),
            name: borrower.to_string(),
            total_stuff: 5,
            note: None,
            date_time: None,
            created_at: None,
            restoration: returned.then(|| Restoration {
                id: format!("r-{}", id),
                lending_id: Some(id.to_string()),
                total_good_stuff: 5,
                total_defec_stuff: 0,
                date_time: None,
                created_at: None,
            }),
        }
    }

    #[test]
    fn search_covers_item_borrower_and_id() {
        let record = lending("l1", "Budi", Some("Projector"), false);
        assert!(record.matches_filter("proj"));
        assert!(record.matches_filter("budi"));
        assert!(record.matches_filter("L1"));
        assert!(!record.matches_filter("chair"));
    }

    #[test]
    fn status_category_follows_restoration_presence() {
        assert_eq!(
            lending("l1", "Budi", None, false).category(),
            Some("borrowed")
        );
        assert_eq!(
            lending("l2", "Sari", None, true).category(),
            Some("returned")
        );
    }

    #[test]
    fn borrower_sort_ignores_case() {
        let a = lending("l1", "andi", None, false);
        let b = lending("l2", "Budi", None, false);
        assert_eq!(a.compare_by_field(&b, "borrower"), Ordering::Less);
    }

    #[test]
    fn non_numeric_drafts_get_their_own_message() {
        let err = parse_return_split("abc", "1").unwrap_err();
        assert!(err.contains("whole number"));
        assert!(parse_return_split("", "0").is_err());
        assert_eq!(parse_return_split(" 3 ", "1"), Ok((3, 1)));
    }

    #[test]
    fn return_split_must_sum_to_borrowed() {
        assert!(validate_return(3, 2, 5).is_ok());
        let err = validate_return(3, 1, 5).unwrap_err();
        assert!(err.contains('4'));
        assert!(err.contains('5'));
    }

    #[test]
    fn negative_quantities_are_rejected() {
        assert!(validate_return(-1, 6, 5).is_err());
        assert!(validate_return(6, -1, 5).is_err());
    }

    #[test]
    fn complement_clamps_to_the_borrowed_range() {
        assert_eq!(complement_return_field(3, 5), 2);
        assert_eq!(complement_return_field(0, 5), 5);
        assert_eq!(complement_return_field(9, 5), 0);
        assert_eq!(complement_return_field(-2, 5), 5);
    }
}
