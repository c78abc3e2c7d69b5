use contracts::domain::inbound::InboundStuff;
use contracts::domain::lending::Lending;
use contracts::domain::restoration::Restoration;
use contracts::domain::stuff::Stuff;
use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::stuff::StuffStatus;
use crate::domain::{inbound, lending, restoration, stuff};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;

/// Counters shown on both role dashboards. Pure aggregation over the four
/// fetched collections so it can be checked without a browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_items: i64,
    pub available_items: i64,
    pub low_stock_items: i64,
    pub out_of_stock_items: i64,
    pub total_inbound: i64,
    pub total_inbound_quantity: i64,
    pub active_borrowings: i64,
    pub completed_borrowings: i64,
}

impl DashboardStats {
    pub fn from_parts(
        stuffs: &[Stuff],
        inbounds: &[InboundStuff],
        lendings: &[Lending],
        restorations: &[Restoration],
    ) -> Self {
        let mut stats = DashboardStats {
            total_items: stuffs.len() as i64,
            total_inbound: inbounds.len() as i64,
            completed_borrowings: restorations.len() as i64,
            ..Default::default()
        };
        for item in stuffs {
            match StuffStatus::of(item) {
                StuffStatus::Available => stats.available_items += 1,
                StuffStatus::LowStock => stats.low_stock_items += 1,
                StuffStatus::OutOfStock | StuffStatus::NoRecord => stats.out_of_stock_items += 1,
            }
        }
        for receipt in inbounds {
            stats.total_inbound_quantity += receipt.total;
        }
        stats.active_borrowings = lendings.iter().filter(|l| !l.is_returned()).count() as i64;
        stats
    }
}

/// Landing page for both roles. All four resources are fetched in one
/// concurrent burst; a failure on any of them surfaces as one error line
/// while the cards stay in their loading state.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = use_api();

    let stats = RwSignal::new(None::<DashboardStats>);
    let low_stock_names = RwSignal::new(Vec::<String>::new());
    let page_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let (stuffs, inbounds, lendings, restorations) = join!(
            stuff::api::list(&client),
            inbound::api::list(&client),
            lending::api::list(&client),
            restoration::api::list(&client),
        );

        let merged = (|| Ok::<_, ApiError>((stuffs?, inbounds?, lendings?, restorations?)))();
        match merged {
            Ok((stuffs, inbounds, lendings, restorations)) => {
                let _ = stats.try_set(Some(DashboardStats::from_parts(
                    &stuffs,
                    &inbounds,
                    &lendings,
                    &restorations,
                )));
                let _ = low_stock_names.try_set(
                    stuffs
                        .iter()
                        .filter(|s| StuffStatus::of(s) == StuffStatus::LowStock)
                        .map(|s| s.name.clone())
                        .collect(),
                );
            }
            Err(ApiError::Unauthorized) => {}
            Err(err) => {
                let _ = page_error.try_set(Some(err.to_string()));
            }
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
            </div>

            {move || {
                page_error.get().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })
            }}

            {move || {
                let names = low_stock_names.get();
                (!names.is_empty()).then(|| view! {
                    <div class="alert alert--warning">
                        {icon("alert-triangle")}
                        " Low stock: "
                        {names.join(", ")}
                    </div>
                })
            }}

            <div class="stat-grid">
                <StatCard
                    label="Total Items".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_items))
                    tone=StatTone::Primary
                />
                <StatCard
                    label="Available".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.available_items))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Low Stock".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.low_stock_items))
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Out of Stock".to_string()
                    icon_name="alert-circle".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.out_of_stock_items))
                    tone=StatTone::Danger
                />
                <StatCard
                    label="Inbound Receipts".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_inbound))
                    tone=StatTone::Primary
                />
                <StatCard
                    label="Items Received".to_string()
                    icon_name="download".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_inbound_quantity))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Active Borrowings".to_string()
                    icon_name="user".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.active_borrowings))
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Completed Borrowings".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.completed_borrowings))
                    tone=StatTone::Success
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::stuff::StuffStock;

    fn stuff(name: &str, available: Option<i64>) -> Stuff {
        Stuff {
            id: format!("s-{}", name),
            name: name.to_string(),
            stuff_type: "Lab".to_string(),
            stuff_stock: available.map(|a| StuffStock {
                total_available: a,
                total_defec: 0,
            }),
            created_at: None,
            updated_at: None,
        }
    }

    fn receipt(total: i64) -> InboundStuff {
        InboundStuff {
            id: format!("i-{}", total),
            stuff_id: None,
            stuff: None,
            total,
            proof_file: None,
            date_time: None,
            created_at: None,
        }
    }

    fn lending(id: &str, returned: bool) -> Lending {
        Lending {
            id: id.to_string(),
            stuff_id: None,
            stuff: None,
            name: "Budi".to_string(),
            total_stuff: 1,
            note: None,
            date_time: None,
            created_at: None,
            restoration: returned.then(|| Restoration {
                id: format!("r-{}", id),
                lending_id: Some(id.to_string()),
                total_good_stuff: 1,
                total_defec_stuff: 0,
                date_time: None,
                created_at: None,
            }),
        }
    }

    #[test]
    fn aggregates_cover_all_four_resources() {
        let stuffs = vec![
            stuff("a", Some(10)),
            stuff("b", Some(3)),
            stuff("c", Some(0)),
            stuff("d", None),
        ];
        let inbounds = vec![receipt(10), receipt(5)];
        let lendings = vec![lending("l1", true), lending("l2", false), lending("l3", false)];
        let restorations = vec![Restoration {
            id: "r-l1".to_string(),
            lending_id: Some("l1".to_string()),
            total_good_stuff: 1,
            total_defec_stuff: 0,
            date_time: None,
            created_at: None,
        }];

        let stats = DashboardStats::from_parts(&stuffs, &inbounds, &lendings, &restorations);
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.available_items, 1);
        assert_eq!(stats.low_stock_items, 1);
        assert_eq!(stats.out_of_stock_items, 2);
        assert_eq!(stats.total_inbound, 2);
        assert_eq!(stats.total_inbound_quantity, 15);
        assert_eq!(stats.active_borrowings, 2);
        assert_eq!(stats.completed_borrowings, 1);
    }

    #[test]
    fn empty_inputs_yield_zeroes() {
        let stats = DashboardStats::from_parts(&[], &[], &[], &[]);
        assert_eq!(stats, DashboardStats::default());
    }
}
