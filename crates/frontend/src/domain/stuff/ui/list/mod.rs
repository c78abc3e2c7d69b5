use contracts::domain::stuff::{Stuff, StuffPayload, STUFF_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::inbound;
use crate::domain::stuff::{api, StuffStatus};
use crate::shared::alert::{FlashAlert, FlashBanner};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::export::export_xlsx;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, get_sort_indicator, ListEmptyState};
use crate::shared::modal::{Modal, ModalIntent};

pub mod state;

use state::{export_columns, StuffListState, StuffStats, EXPORT_FILE, EXPORT_SHEET};

/// Admin items page: stock table with search, type filter, sortable
/// columns, spreadsheet export and the create/edit/delete/add-stock
/// dialogs. Every mutation re-fetches the list so stock totals are never
/// guessed client-side.
#[component]
pub fn StuffList() -> impl IntoView {
    let client = use_api();
    let state = StuffListState::new();
    let alert = FlashAlert::new();

    let modal = RwSignal::new(ModalIntent::<Stuff>::Closed);
    let page_error = RwSignal::new(None::<String>);

    // form drafts, cleared whenever the dialog closes
    let draft_name = RwSignal::new(String::new());
    let draft_type = RwSignal::new(STUFF_TYPES[0].to_string());
    let draft_total = RwSignal::new(String::new());
    let draft_proof = RwSignal::new(None::<web_sys::File>);
    let form_error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(BTreeMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

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
        draft_name.set(String::new());
        draft_type.set(STUFF_TYPES[0].to_string());
        draft_total.set(String::new());
        draft_proof.set(None);
        form_error.set(None);
        field_errors.set(BTreeMap::new());
        saving.set(false);
    });

    let open_create = move |_| {
        modal.set(ModalIntent::Create);
    };

    let open_edit = move |item: Stuff| {
        draft_name.set(item.name.clone());
        draft_type.set(item.stuff_type.clone());
        modal.set(ModalIntent::Edit(item));
    };

    let submit_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = StuffPayload {
            name: draft_name.get_untracked().trim().to_string(),
            stuff_type: draft_type.get_untracked(),
        };
        if payload.name.is_empty() {
            form_error.set(Some("Name is required".to_string()));
            return;
        }
        let editing = match modal.get_untracked() {
            ModalIntent::Edit(item) => Some(item.id),
            _ => None,
        };

        spawn_local(async move {
            saving.set(true);
            form_error.set(None);
            field_errors.set(BTreeMap::new());

            let result = match &editing {
                Some(id) => api::update(&client, id, &payload).await,
                None => api::create(&client, &payload).await,
            };
            match result {
                Ok(()) => {
                    close_modal.run(());
                    alert.show(if editing.is_some() {
                        "Item updated"
                    } else {
                        "Item created"
                    });
                    load_items();
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    let _ = field_errors.try_set(err.field_errors());
                    let _ = form_error.try_set(Some(err.to_string()));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    let submit_delete = move |_| {
        let target = match modal.get_untracked() {
            ModalIntent::Delete(item) => item,
            _ => return,
        };
        spawn_local(async move {
            saving.set(true);
            match api::remove(&client, &target.id).await {
                Ok(()) => {
                    close_modal.run(());
                    alert.show("Item deleted");
                    load_items();
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    let _ = form_error.try_set(Some(err.to_string()));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    let on_proof_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        draft_proof.set(input.files().and_then(|files| files.get(0)));
    };

    let submit_add_stock = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = match modal.get_untracked() {
            ModalIntent::Action(item) => item,
            _ => return,
        };
        let total = match draft_total.get_untracked().trim().parse::<i64>() {
            Ok(total) if total > 0 => total,
            _ => {
                form_error.set(Some("Quantity must be a positive number".to_string()));
                return;
            }
        };
        let proof = draft_proof.get_untracked();

        spawn_local(async move {
            saving.set(true);
            form_error.set(None);
            field_errors.set(BTreeMap::new());

            match inbound::api::create(&client, &target.id, total, proof).await {
                Ok(()) => {
                    close_modal.run(());
                    alert.show("Stock added");
                    load_items();
                }
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    let _ = field_errors.try_set(err.field_errors());
                    let _ = form_error.try_set(Some(err.to_string()));
                    let _ = saving.try_set(false);
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

    let stats = Signal::derive(move || StuffStats::from_items(&state.items.get()));

    let field_messages = move |key: &'static str| {
        move || {
            field_errors.get().get(key).map(|messages| {
                view! {
                    <ul class="form-errors">
                        {messages
                            .iter()
                            .map(|m| view! { <li>{m.clone()}</li> })
                            .collect_view()}
                    </ul>
                }
            })
        }
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Inventory Items"</h1>
                <div class="page-header__actions">
                    <button class="button button--secondary" on:click=on_export>
                        {icon("download")}
                        " Export"
                    </button>
                    <button class="button button--primary" on:click=open_create>
                        {icon("plus")}
                        " Add Item"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Items".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().total))
                    tone=StatTone::Primary
                />
                <StatCard
                    label="Available".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().available))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Low Stock".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().low_stock))
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Out of Stock".to_string()
                    icon_name="alert-circle".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().out_of_stock))
                    tone=StatTone::Danger
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
                        placeholder="Search by name or id..."
                        prop:value=move || state.search_query.get()
                        on:input=move |ev| state.search_query.set(event_target_value(&ev))
                    />
                </div>
                <select
                    class="form-control list-controls__filter"
                    prop:value=move || state.filter_type.get()
                    on:change=move |ev| state.filter_type.set(event_target_value(&ev))
                >
                    <option value="all">"All types"</option>
                    {move || {
                        state
                            .unique_types()
                            .into_iter()
                            .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("name")>
                            "Name"
                            {move || get_sort_indicator(&state.sort_field.get(), "name", state.sort_ascending.get())}
                        </th>
                        <th>"Type"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("stock")>
                            "Available"
                            {move || get_sort_indicator(&state.sort_field.get(), "stock", state.sort_ascending.get())}
                        </th>
                        <th>"Defective"</th>
                        <th>"Status"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("updated")>
                            "Updated"
                            {move || get_sort_indicator(&state.sort_field.get(), "updated", state.sort_ascending.get())}
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
                                let status = StuffStatus::of(&item);
                                let edit_item = item.clone();
                                let delete_item = item.clone();
                                let stock_item = item.clone();
                                let updated = item
                                    .updated_at
                                    .clone()
                                    .or_else(|| item.created_at.clone())
                                    .map(|v| crate::shared::date_utils::format_date(&v))
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.stuff_type.clone()}</td>
                                        <td>{item.available()}</td>
                                        <td>{item.defective()}</td>
                                        <td>
                                            <span class=status.badge_class()>{status.label()}</span>
                                        </td>
                                        <td>{updated}</td>
                                        <td class="data-table__actions">
                                            <button
                                                class="button button--small button--secondary"
                                                on:click=move |_| modal.set(ModalIntent::Action(stock_item.clone()))
                                            >
                                                "Add stock"
                                            </button>
                                            <button
                                                class="button button--small"
                                                on:click=move |_| open_edit(edit_item.clone())
                                            >
                                                "Edit"
                                            </button>
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
                        view! { <div class="list-empty">"No items yet. Add the first one."</div> }
                            .into_any(),
                    ),
                    Some(ListEmptyState::NoMatch) => Some(
                        view! {
                            <div class="list-empty">
                                "Nothing matches the current filter."
                                <button class="button button--link" on:click=move |_| state.reset_filters()>
                                    "Reset filters"
                                </button>
                            </div>
                        }
                        .into_any(),
                    ),
                    None => None,
                }
            }}

            {move || match modal.get() {
                ModalIntent::Closed => ().into_any(),
                ModalIntent::Create | ModalIntent::Edit(_) => {
                    let editing = matches!(modal.get(), ModalIntent::Edit(_));
                    let title = if editing { "Edit Item" } else { "Add Item" };
                    view! {
                        <Modal title=title.to_string() on_close=close_modal>
                            <form on:submit=submit_save>
                                {move || {
                                    form_error.get().map(|message| view! {
                                        <div class="alert alert--error">{message}</div>
                                    })
                                }}
                                <label class="form-label">"Name"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    prop:value=move || draft_name.get()
                                    on:input=move |ev| draft_name.set(event_target_value(&ev))
                                />
                                {field_messages("name")}
                                <label class="form-label">"Type"</label>
                                <select
                                    class="form-control"
                                    prop:value=move || draft_type.get()
                                    on:change=move |ev| draft_type.set(event_target_value(&ev))
                                >
                                    {STUFF_TYPES
                                        .iter()
                                        .map(|t| view! { <option value=*t>{*t}</option> })
                                        .collect_view()}
                                </select>
                                {field_messages("type")}
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                >
                                    {if editing { "Save changes" } else { "Create item" }}
                                </button>
                            </form>
                        </Modal>
                    }
                    .into_any()
                }
                ModalIntent::Delete(item) => {
                    let name = item.name.clone();
                    view! {
                        <Modal title="Delete Item".to_string() on_close=close_modal>
                            {move || {
                                form_error.get().map(|message| view! {
                                    <div class="alert alert--error">{message}</div>
                                })
                            }}
                            <p>
                                "Delete \"" {name.clone()}
                                "\"? Its inbound and lending history stays on the server."
                            </p>
                            <div class="modal-actions">
                                <button
                                    class="button button--danger"
                                    disabled=move || saving.get()
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
                ModalIntent::Action(item) => {
                    let name = item.name.clone();
                    view! {
                        <Modal title="Add Stock".to_string() on_close=close_modal>
                            <form on:submit=submit_add_stock>
                                {move || {
                                    form_error.get().map(|message| view! {
                                        <div class="alert alert--error">{message}</div>
                                    })
                                }}
                                <p class="modal-subject">{name.clone()}</p>
                                <label class="form-label">"Quantity"</label>
                                <input
                                    type="number"
                                    min="1"
                                    class="form-control"
                                    prop:value=move || draft_total.get()
                                    on:input=move |ev| draft_total.set(event_target_value(&ev))
                                />
                                {field_messages("total")}
                                <label class="form-label">"Proof file"</label>
                                <input type="file" class="form-control" on:change=on_proof_change />
                                {field_messages("proof_file")}
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                >
                                    "Record inbound"
                                </button>
                            </form>
                        </Modal>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
