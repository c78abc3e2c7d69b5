use contracts::domain::inbound::InboundStuff;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::inbound::api;
use crate::shared::alert::{FlashAlert, FlashBanner};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::format_date;
use crate::shared::export::export_xlsx;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, get_sort_indicator, ListEmptyState};
use crate::shared::modal::{Modal, ModalIntent};

pub mod state;

use state::{export_columns, InboundListState, InboundStats, EXPORT_FILE, EXPORT_SHEET};

/// Admin inbound history: read-only log of stock receipts. Creation lives
/// on the items page next to the item being restocked; here a receipt can
/// only be inspected, exported or deleted.
#[component]
pub fn InboundList() -> impl IntoView {
    let client = use_api();
    let state = InboundListState::new();
    let alert = FlashAlert::new();

    let modal = RwSignal::new(ModalIntent::<InboundStuff>::Closed);
    let page_error = RwSignal::new(None::<String>);
    let modal_error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    let load_items = move || {
        spawn_local(async move {
            match api::list(&client).await {
                Ok(items) => {
                    let _ = state.items.try_set(items);
                    let _ = state.is_loaded.try_set(true);
                    let _ = page_error.try_set(None);
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    let _ = page_error.try_set(Some(err.to_string()));
                    let _ = state.is_loaded.try_set(true);
                }
            }
        });
    };
    load_items();

    let close_modal = Callback::new(move |_: ()| {
        modal.set(ModalIntent::Closed);
        modal_error.set(None);
        deleting.set(false);
    });

    let submit_delete = move |_| {
        let target = match modal.get_untracked() {
            ModalIntent::Delete(item) => item,
            _ => return,
        };
        spawn_local(async move {
            deleting.set(true);
            match api::remove(&client, &target.id).await {
                Ok(()) => {
                    close_modal.run(());
                    alert.show("Receipt deleted");
                    load_items();
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    let _ = modal_error.try_set(Some(err.to_string()));
                    let _ = deleting.try_set(false);
                }
            }
        });
    };

    let on_export = move |_| {
        let view = state.derived();
        let rows = if view.is_empty() {
            state.items.get_untracked()
        } else {
            view
        };
        match export_xlsx(&rows, &export_columns(), EXPORT_FILE, EXPORT_SHEET) {
            Ok(()) => alert.show("Export downloaded"),
            Err(message) => page_error.set(Some(message)),
        }
    };

    let stats = Signal::derive(move || InboundStats::from_items(&state.items.get()));

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Inbound Items"</h1>
                <div class="page-header__actions">
                    <button class="button button--secondary" on:click=on_export>
                        {icon("download")}
                        " Export"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Receipts".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().total))
                    tone=StatTone::Primary
                />
                <StatCard
                    label="Items Received".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().total_items))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Distinct Products".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || {
                        state.is_loaded.get().then(|| stats.get().unique_products)
                    })
                    tone=StatTone::Warning
                />
            </div>

            <FlashBanner alert=alert />

            {move || {
                page_error.get().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })
            }}

            <div class="list-controls">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Search by item name or id..."
                        prop:value=move || state.search_query.get()
                        on:input=move |ev| state.search_query.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("name")>
                            "Item"
                            {move || get_sort_indicator(&state.sort_field.get(), "name", state.sort_ascending.get())}
                        </th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("total")>
                            "Quantity"
                            {move || get_sort_indicator(&state.sort_field.get(), "total", state.sort_ascending.get())}
                        </th>
                        <th>"Proof"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("date")>
                            "Date"
                            {move || get_sort_indicator(&state.sort_field.get(), "date", state.sort_ascending.get())}
                        </th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .derived()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let delete_item = item.clone();
                                let name = item.stuff_name().unwrap_or("-").to_string();
                                let proof = item.proof_file.clone().unwrap_or_else(|| "-".to_string());
                                let date = item
                                    .timestamp()
                                    .map(format_date)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>{name}</td>
                                        <td>{item.total}</td>
                                        <td>{proof}</td>
                                        <td>{date}</td>
                                        <td class="data-table__actions">
                                            <button
                                                class="button button--small button--danger"
                                                on:click=move |_| modal.set(ModalIntent::Delete(delete_item.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                if !state.is_loaded.get() {
                    return Some(view! { <div class="list-empty">"Loading..."</div> }.into_any());
                }
                match empty_state(state.items.get().len(), state.derived().len()) {
                    Some(ListEmptyState::NoData) => Some(
                        view! { <div class="list-empty">"No inbound records yet."</div> }.into_any(),
                    ),
                    Some(ListEmptyState::NoMatch) => Some(
                        view! {
                            <div class="list-empty">
                                "Nothing matches the current search."
                                <button class="button button--link" on:click=move |_| state.reset_filters()>
                                    "Reset search"
                                </button>
                            </div>
                        }
                        .into_any(),
                    ),
                    None => None,
                }
            }}

            {move || match modal.get() {
                ModalIntent::Delete(item) => {
                    let name = item.stuff_name().unwrap_or("this receipt").to_string();
                    view! {
                        <Modal title="Delete Receipt".to_string() on_close=close_modal>
                            {move || {
                                modal_error.get().map(|message| view! {
                                    <div class="alert alert--error">{message}</div>
                                })
                            }}
                            <p>
                                "Delete the inbound record for \"" {name.clone()}
                                "\"? Stock totals are recomputed by the server."
                            </p>
                            <div class="modal-actions">
                                <button
                                    class="button button--danger"
                                    disabled=move || deleting.get()
                                    on:click=submit_delete
                                >
                                    "Delete"
                                </button>
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| close_modal.run(())
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </Modal>
                    }
                    .into_any()
                }
                _ => ().into_any(),
            }}
        </div>
    }
}
