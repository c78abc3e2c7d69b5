use contracts::domain::stuff::Stuff;
use leptos::prelude::*;

use crate::domain::stuff::StuffStatus;
use crate::shared::export::Column;
use crate::shared::list_utils::{filter_list, sort_list};

/// Reactive state behind the items table. The raw fetch result and the
/// view controls are separate signals; the rendered view is derived on
/// every read, never stored.
#[derive(Clone, Copy)]
pub struct StuffListState {
    pub items: RwSignal<Vec<Stuff>>,
    pub search_query: RwSignal<String>,
    pub filter_type: RwSignal<String>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub is_loaded: RwSignal<bool>,
}

impl StuffListState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            search_query: RwSignal::new(String::new()),
            filter_type: RwSignal::new("all".to_string()),
            sort_field: RwSignal::new("name".to_string()),
            sort_ascending: RwSignal::new(true),
            is_loaded: RwSignal::new(false),
        }
    }

    /// Filtered and sorted view of the current fetch result.
    pub fn derived(&self) -> Vec<Stuff> {
        let items = self.items.get();
        let filter_type = self.filter_type.get();
        let category = (filter_type != "all").then_some(filter_type.as_str());

        let mut view = filter_list(&items, category, &self.search_query.get());
        sort_list(
            &mut view,
            &self.sort_field.get(),
            self.sort_ascending.get(),
        );
        view
    }

    /// Distinct item types present in the fetched data, fetch order.
    pub fn unique_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for item in self.items.get() {
            if !types.contains(&item.stuff_type) {
                types.push(item.stuff_type.clone());
            }
        }
        types
    }

    pub fn toggle_sort(&self, field: &str) {
        if self.sort_field.get_untracked() == field {
            self.sort_ascending.update(|asc| *asc = !*asc);
        } else {
            self.sort_field.set(field.to_string());
            self.sort_ascending.set(true);
        }
    }

    pub fn reset_filters(&self) {
        self.search_query.set(String::new());
        self.filter_type.set("all".to_string());
    }
}

impl Default for StuffListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregates shown on the cards above the table. Computed over the raw
/// collection so they do not move when the user filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StuffStats {
    pub total: i64,
    pub available: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
}

impl StuffStats {
    pub fn from_items(items: &[Stuff]) -> Self {
        let mut stats = StuffStats {
            total: items.len() as i64,
            ..Default::default()
        };
        for item in items {
            match StuffStatus::of(item) {
                StuffStatus::Available => stats.available += 1,
                StuffStatus::LowStock => stats.low_stock += 1,
                StuffStatus::OutOfStock | StuffStatus::NoRecord => stats.out_of_stock += 1,
            }
        }
        stats
    }
}

pub const EXPORT_FILE: &str = "inventory-items.xlsx";
pub const EXPORT_SHEET: &str = "Inventory Items";

pub fn export_columns() -> Vec<Column<Stuff>> {
    vec![
        Column {
            header: "No",
            cell: |index, _| (index + 1).to_string(),
        },
        Column {
            header: "Title",
            cell: |_, s| s.name.clone(),
        },
        Column {
            header: "Type",
            cell: |_, s| s.stuff_type.clone(),
        },
        Column {
            header: "TotalAvail",
            cell: |_, s| {
                s.stuff_stock
                    .as_ref()
                    .map(|st| st.total_available.to_string())
                    .unwrap_or_else(|| "-".to_string())
            },
        },
        Column {
            header: "TotalDefec",
            cell: |_, s| {
                s.stuff_stock
                    .as_ref()
                    .map(|st| st.total_defec.to_string())
                    .unwrap_or_else(|| "-".to_string())
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_rows;
    use contracts::domain::stuff::StuffStock;

    fn stuff(name: &str, kind: &str, stock: Option<(i64, i64)>) -> Stuff {
        Stuff {
            id: format!("id-{}", name),
            name: name.to_string(),
            stuff_type: kind.to_string(),
            stuff_stock: stock.map(|(a, d)| StuffStock {
                total_available: a,
                total_defec: d,
            }),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn stats_partition_the_collection() {
        let items = vec![
            stuff("a", "Lab", Some((10, 0))),
            stuff("b", "Lab", Some((3, 1))),
            stuff("c", "Sarpras", Some((0, 2))),
            stuff("d", "Sarpras", None),
        ];
        let stats = StuffStats::from_items(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 2);
        assert_eq!(
            stats.available + stats.low_stock + stats.out_of_stock,
            stats.total
        );
    }

    #[test]
    fn stats_ignore_the_active_filter() {
        let items = vec![
            stuff("a", "Lab", Some((10, 0))),
            stuff("b", "Sarpras", Some((0, 0))),
        ];
        let all = StuffStats::from_items(&items);
        // a filtered view never feeds the cards, only the raw list does
        let filtered: Vec<Stuff> = items
            .iter()
            .filter(|s| s.stuff_type == "Lab")
            .cloned()
            .collect();
        assert_ne!(StuffStats::from_items(&filtered), all);
        assert_eq!(all.total, 2);
    }

    #[test]
    fn export_rows_substitute_placeholder_for_missing_stock() {
        let items = vec![stuff("Chair", "Sarpras", None)];
        let rows = build_rows(&items, &export_columns());
        assert_eq!(rows[0], vec!["1", "Chair", "Sarpras", "-", "-"]);
    }

    #[test]
    fn export_rows_carry_stock_numbers() {
        let items = vec![stuff("Projector", "Lab", Some((4, 1)))];
        let rows = build_rows(&items, &export_columns());
        assert_eq!(rows[0], vec!["1", "Projector", "Lab", "4", "1"]);
    }
}
