use contracts::domain::inbound::InboundStuff;
use std::cmp::Ordering;

use crate::shared::date_utils::compare_timestamps;
use crate::shared::list_utils::{contains_ci, Searchable, Sortable};

pub mod api;
pub mod ui;

impl Searchable for InboundStuff {
    fn matches_filter(&self, filter: &str) -> bool {
        self.stuff_name()
            .map(|name| contains_ci(name, filter))
            .unwrap_or(false)
            || contains_ci(&self.id, filter)
    }
}

impl Sortable for InboundStuff {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => compare_timestamps(self.timestamp(), other.timestamp()),
            "name" => {
                let a = self.stuff_name().unwrap_or("").to_lowercase();
                let b = other.stuff_name().unwrap_or("").to_lowercase();
                a.cmp(&b)
            }
            "total" => self.total.cmp(&other.total),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::stuff::Stuff;

    fn receipt(id: &str, name: Option<&str>, total: i64, date: Option<&str>) -> InboundStuff {
        InboundStuff {
            id: id.to_string(),
            stuff_id: None,
            stuff: name.map(|n| Stuff {
                id: format!("s-{}", n),
                name: n.to_string(),
                stuff_type: "Lab".to_string(),
                stuff_stock: None,
                created_at: None,
                updated_at: None,
            }),
            total,
            proof_file: None,
            date_time: date.map(String::from),
            created_at: None,
        }
    }

    #[test]
    fn search_covers_related_name_and_own_id() {
        let item = receipt("in-7", Some("Projector"), 4, None);
        assert!(item.matches_filter("proj"));
        assert!(item.matches_filter("IN-7"));
        assert!(!item.matches_filter("chair"));
    }

    #[test]
    fn missing_relation_only_matches_id() {
        let item = receipt("in-8", None, 2, None);
        assert!(!item.matches_filter("projector"));
        assert!(item.matches_filter("in-8"));
    }

    #[test]
    fn date_sort_uses_wire_timestamps() {
        let older = receipt("a", None, 1, Some("2024-01-05T08:00:00Z"));
        let newer = receipt("b", None, 1, Some("2024-01-06T08:00:00Z"));
        assert_eq!(older.compare_by_field(&newer, "date"), Ordering::Less);
    }

    #[test]
    fn date_desc_puts_the_newer_receipt_first_regardless_of_fetch_order() {
        use crate::shared::list_utils::sort_list;

        let mut items = vec![
            receipt("a", None, 1, Some("2024-01-05")),
            receipt("b", None, 1, Some("2024-01-06")),
        ];
        sort_list(&mut items, "date", false);
        assert_eq!(items[0].id, "b");

        let mut reversed = vec![
            receipt("b", None, 1, Some("2024-01-06")),
            receipt("a", None, 1, Some("2024-01-05")),
        ];
        sort_list(&mut reversed, "date", false);
        assert_eq!(reversed[0].id, "b");
    }
}
