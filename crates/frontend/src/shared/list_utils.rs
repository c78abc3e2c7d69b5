/// List pipeline shared by every data page: search filter, category
/// filter, stable sort, empty-state discrimination.
use std::cmp::Ordering;

/// Data types that support free-text search.
pub trait Searchable {
    /// True when the record matches the query (callers pass it trimmed,
    /// implementations compare case-insensitively via `contains_ci`).
    fn matches_filter(&self, filter: &str) -> bool;

    /// Category used by the page's type/status dropdown, if any.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Data types that support sorting by a named field.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring match.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep a record iff it matches the active category (when one is set) and
/// the search query (when non-empty). Order-preserving and idempotent.
pub fn filter_list<T: Searchable + Clone>(
    items: &[T],
    category: Option<&str>,
    query: &str,
) -> Vec<T> {
    let query = query.trim();
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category() == Some(c)))
        .filter(|item| query.is_empty() || item.matches_filter(query))
        .cloned()
        .collect()
}

/// Stable sort by the selected field; ties keep their fetch order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    } else {
        " \u{21c5}"
    }
}

/// Why a table body is empty. `NoData` means the resource itself has no
/// records; `NoMatch` means the active filter hid everything and the UI
/// must offer a one-click reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEmptyState {
    NoData,
    NoMatch,
}

pub fn empty_state(raw_len: usize, filtered_len: usize) -> Option<ListEmptyState> {
    if raw_len == 0 {
        Some(ListEmptyState::NoData)
    } else if filtered_len == 0 {
        Some(ListEmptyState::NoMatch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        kind: &'static str,
        qty: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter) || contains_ci(self.id, filter)
        }

        fn category(&self) -> Option<&str> {
            Some(self.kind)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "qty" => self.qty.cmp(&other.qty),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a1", name: "Projector", kind: "Lab", qty: 4 },
            Row { id: "b2", name: "Router", kind: "Lab", qty: 9 },
            Row { id: "c3", name: "Chair", kind: "Sarpras", qty: 4 },
            Row { id: "d4", name: "projector cable", kind: "Lab", qty: 1 },
        ]
    }

    #[test]
    fn filter_keeps_exactly_the_matches_in_order() {
        let filtered = filter_list(&rows(), None, "proj");
        assert_eq!(
            filtered.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["a1", "d4"]
        );
    }

    #[test]
    fn filter_is_case_insensitive_and_checks_id() {
        let filtered = filter_list(&rows(), None, "B2");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Router");
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter_list(&rows(), Some("Lab"), "ro");
        let twice = filter_list(&once, Some("Lab"), "ro");
        assert_eq!(once, twice);
    }

    #[test]
    fn category_and_query_compose() {
        let filtered = filter_list(&rows(), Some("Lab"), "r");
        assert_eq!(
            filtered.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["a1", "b2", "d4"]
        );
        let filtered = filter_list(&rows(), Some("Sarpras"), "");
        assert_eq!(filtered.iter().map(|r| r.id).collect::<Vec<_>>(), vec!["c3"]);
    }

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(filter_list(&rows(), None, "   ").len(), 4);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut items = rows();
        sort_list(&mut items, "qty", true);
        // a1 and c3 both have qty 4 and must keep their fetch order
        assert_eq!(
            items.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["d4", "a1", "c3", "b2"]
        );
    }

    #[test]
    fn sorting_twice_matches_sorting_once() {
        let mut once = rows();
        sort_list(&mut once, "name", false);
        let mut twice = once.clone();
        sort_list(&mut twice, "name", false);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_states_are_distinct() {
        assert_eq!(empty_state(0, 0), Some(ListEmptyState::NoData));
        assert_eq!(empty_state(5, 0), Some(ListEmptyState::NoMatch));
        assert_eq!(empty_state(5, 3), None);
    }
}
