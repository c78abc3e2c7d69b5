use contracts::domain::lending::Lending;
use leptos::prelude::*;

use crate::shared::date_utils::format_export_date;
use crate::shared::export::Column;
use crate::shared::list_utils::{filter_list, sort_list};

/// Reactive state behind the lending history table. The status dropdown
/// maps onto the category filter; newest lendings come first by default.
#[derive(Clone, Copy)]
pub struct LendingListState {
    pub items: RwSignal<Vec<Lending>>,
    pub search_query: RwSignal<String>,
    pub filter_status: RwSignal<String>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub is_loaded: RwSignal<bool>,
}

impl LendingListState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            search_query: RwSignal::new(String::new()),
            filter_status: RwSignal::new("all".to_string()),
            sort_field: RwSignal::new("date".to_string()),
            sort_ascending: RwSignal::new(false),
            is_loaded: RwSignal::new(false),
        }
    }

    pub fn derived(&self) -> Vec<Lending> {
        let filter_status = self.filter_status.get();
        let category = (filter_status != "all").then_some(filter_status.as_str());

        let mut view = filter_list(&self.items.get(), category, &self.search_query.get());
        sort_list(
            &mut view,
            &self.sort_field.get(),
            self.sort_ascending.get(),
        );
        view
    }

    pub fn toggle_sort(&self, field: &str) {
        if self.sort_field.get_untracked() == field {
            self.sort_ascending.update(|asc| *asc = !*asc);
        } else {
            self.sort_field.set(field.to_string());
            self.sort_ascending.set(field != "date");
        }
    }

    pub fn reset_filters(&self) {
        self.search_query.set(String::new());
        self.filter_status.set("all".to_string());
    }
}

impl Default for LendingListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Card aggregates over the raw lending list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LendingStats {
    pub total: i64,
    pub returned: i64,
    pub borrowed: i64,
    pub total_items: i64,
}

impl LendingStats {
    pub fn from_items(items: &[Lending]) -> Self {
        let mut stats = LendingStats {
            total: items.len() as i64,
            ..Default::default()
        };
        for item in items {
            stats.total_items += item.total_stuff;
            if item.is_returned() {
                stats.returned += 1;
            } else {
                stats.borrowed += 1;
            }
        }
        stats
    }
}

pub const EXPORT_FILE: &str = "lending-history.xlsx";
pub const EXPORT_SHEET: &str = "Lending History";

pub fn export_columns() -> Vec<Column<Lending>> {
    vec![
        Column {
            header: "No",
            cell: |index, _| (index + 1).to_string(),
        },
        Column {
            header: "Name",
            cell: |_, l| l.name.clone(),
        },
        Column {
            header: "StuffName",
            cell: |_, l| l.stuff_name().unwrap_or("-").to_string(),
        },
        Column {
            header: "TotalStuff",
            cell: |_, l| l.total_stuff.to_string(),
        },
        Column {
            header: "DateOfLending",
            cell: |_, l| format_export_date(l.timestamp()),
        },
        Column {
            header: "RestorationStatus",
            cell: |_, l| {
                if l.is_returned() {
                    "Returned".to_string()
                } else {
                    "Borrowed".to_string()
                }
            },
        },
        Column {
            header: "RestorationTotalGoodStuff",
            cell: |_, l| {
                l.restoration
                    .as_ref()
                    .map(|r| r.total_good_stuff.to_string())
                    .unwrap_or_else(|| "-".to_string())
            },
        },
        Column {
            header: "RestorationTotalDefecStuff",
            cell: |_, l| {
                l.restoration
                    .as_ref()
                    .map(|r| r.total_defec_stuff.to_string())
                    .unwrap_or_else(|| "-".to_string())
            },
        },
        Column {
            header: "DateOfRestoration",
            cell: |_, l| {
                format_export_date(l.restoration.as_ref().and_then(|r| r.timestamp()))
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_rows;
    use contracts::domain::restoration::Restoration;

    fn lending(id: &str, borrower: &str, total: i64, returned: bool) -> Lending {
        Lending {
            id: id.to_string(),
            stuff_id: None,
            stuff: None,
            name: borrower.to_string(),
            total_stuff: total,
            note: None,
            date_time: Some("2024-02-01T10:00:00Z".to_string()),
            created_at: None,
            restoration: returned.then(|| Restoration {
                id: format!("r-{}", id),
                lending_id: Some(id.to_string()),
                total_good_stuff: total - 1,
                total_defec_stuff: 1,
                date_time: Some("2024-02-03T10:00:00Z".to_string()),
                created_at: None,
            }),
        }
    }

    #[test]
    fn stats_split_open_and_closed_lendings() {
        let items = vec![
            lending("l1", "Budi", 5, true),
            lending("l2", "Sari", 2, false),
            lending("l3", "Andi", 3, false),
        ];
        let stats = LendingStats::from_items(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.returned, 1);
        assert_eq!(stats.borrowed, 2);
        assert_eq!(stats.total_items, 10);
        assert_eq!(stats.returned + stats.borrowed, stats.total);
    }

    #[test]
    fn export_rows_for_open_lending_use_placeholders() {
        let rows = build_rows(&[lending("l1", "Budi", 5, false)], &export_columns());
        assert_eq!(
            rows[0],
            vec![
                "1",
                "Budi",
                "-",
                "5",
                "1 February 2024",
                "Borrowed",
                "-",
                "-",
                "-"
            ]
        );
    }

    #[test]
    fn export_rows_for_returned_lending_carry_the_split() {
        let rows = build_rows(&[lending("l1", "Budi", 5, true)], &export_columns());
        assert_eq!(rows[0][5], "Returned");
        assert_eq!(rows[0][6], "4");
        assert_eq!(rows[0][7], "1");
        assert_eq!(rows[0][8], "3 February 2024");
    }
}
