use contracts::domain::inbound::InboundStuff;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::date_utils::format_export_date;
use crate::shared::export::Column;
use crate::shared::list_utils::{filter_list, sort_list};

/// Reactive state behind the inbound receipts table. Newest first by
/// default; receipts have no category dropdown.
#[derive(Clone, Copy)]
pub struct InboundListState {
    pub items: RwSignal<Vec<InboundStuff>>,
    pub search_query: RwSignal<String>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub is_loaded: RwSignal<bool>,
}

impl InboundListState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            search_query: RwSignal::new(String::new()),
            sort_field: RwSignal::new("date".to_string()),
            sort_ascending: RwSignal::new(false),
            is_loaded: RwSignal::new(false),
        }
    }

    pub fn derived(&self) -> Vec<InboundStuff> {
        let mut view = filter_list(&self.items.get(), None, &self.search_query.get());
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
            // dates read best newest first
            self.sort_ascending.set(field != "date");
        }
    }

    pub fn reset_filters(&self) {
        self.search_query.set(String::new());
    }
}

impl Default for InboundListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Card aggregates over the raw receipt list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InboundStats {
    pub total: i64,
    pub total_items: i64,
    pub unique_products: i64,
}

impl InboundStats {
    pub fn from_items(items: &[InboundStuff]) -> Self {
        let mut products: HashSet<&str> = HashSet::new();
        let mut total_items = 0;
        for item in items {
            total_items += item.total;
            if let Some(id) = item
                .stuff_id
                .as_deref()
                .or_else(|| item.stuff.as_ref().map(|s| s.id.as_str()))
            {
                products.insert(id);
            }
        }
        InboundStats {
            total: items.len() as i64,
            total_items,
            unique_products: products.len() as i64,
        }
    }
}

pub const EXPORT_FILE: &str = "inbound-items.xlsx";
pub const EXPORT_SHEET: &str = "Inbound Items";

pub fn export_columns() -> Vec<Column<InboundStuff>> {
    vec![
        Column {
            header: "No",
            cell: |index, _| (index + 1).to_string(),
        },
        Column {
            header: "StuffName",
            cell: |_, r| r.stuff_name().unwrap_or("-").to_string(),
        },
        Column {
            header: "TotalItem",
            cell: |_, r| r.total.to_string(),
        },
        Column {
            header: "ProofFile",
            cell: |_, r| r.proof_file.clone().unwrap_or_else(|| "-".to_string()),
        },
        Column {
            header: "Date",
            cell: |_, r| format_export_date(r.timestamp()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_rows;
    use contracts::domain::stuff::Stuff;

    fn receipt(id: &str, stuff_id: Option<&str>, total: i64) -> InboundStuff {
        InboundStuff {
            id: id.to_string(),
            stuff_id: stuff_id.map(String::from),
            stuff: None,
            total,
            proof_file: None,
            date_time: None,
            created_at: None,
        }
    }

    #[test]
    fn stats_sum_quantities_and_dedup_products() {
        let items = vec![
            receipt("a", Some("s1"), 10),
            receipt("b", Some("s1"), 5),
            receipt("c", Some("s2"), 3),
            receipt("d", None, 2),
        ];
        let stats = InboundStats::from_items(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.total_items, 20);
        assert_eq!(stats.unique_products, 2);
    }

    #[test]
    fn product_id_falls_back_to_embedded_relation() {
        let mut item = receipt("a", None, 1);
        item.stuff = Some(Stuff {
            id: "s9".to_string(),
            name: "Router".to_string(),
            stuff_type: "Lab".to_string(),
            stuff_stock: None,
            created_at: None,
            updated_at: None,
        });
        let stats = InboundStats::from_items(&[item]);
        assert_eq!(stats.unique_products, 1);
    }

    #[test]
    fn export_rows_use_placeholders_for_missing_fields() {
        let items = vec![receipt("a", None, 7)];
        let rows = build_rows(&items, &export_columns());
        assert_eq!(rows[0], vec!["1", "-", "7", "-", "-"]);
    }

    #[test]
    fn export_date_is_long_form() {
        let mut item = receipt("a", None, 1);
        item.date_time = Some("2024-01-05T10:30:00Z".to_string());
        item.proof_file = Some("proof.jpg".to_string());
        let rows = build_rows(&[item], &export_columns());
        assert_eq!(rows[0][3], "proof.jpg");
        assert_eq!(rows[0][4], "5 January 2024");
    }
}
