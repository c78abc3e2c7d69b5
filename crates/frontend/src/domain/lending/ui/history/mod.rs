use contracts::domain::lending::Lending;
use contracts::domain::restoration::{Restoration, RestorationPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::lending::{api, complement_return_field, parse_return_split, validate_return};
use crate::domain::restoration;
use crate::shared::alert::{FlashAlert, FlashBanner};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::format_date;
use crate::shared::export::export_xlsx;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, get_sort_indicator, ListEmptyState};
use crate::shared::modal::{Modal, ModalIntent};

pub mod state;

use state::{export_columns, LendingListState, LendingStats, EXPORT_FILE, EXPORT_SHEET};

/// Staff lending history: every borrowing with its return status, the
/// return dialog and the spreadsheet export. The detail dialog occupies
/// the edit slot; lendings are otherwise immutable.
#[component]
pub fn LendingHistory() -> impl IntoView {
    let client = use_api();
    let state = LendingListState::new();
    let alert = FlashAlert::new();

    let modal = RwSignal::new(ModalIntent::<Lending>::Closed);
    let page_error = RwSignal::new(None::<String>);

    let draft_good = RwSignal::new(String::new());
    let draft_defec = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(BTreeMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    // restoration fetched lazily for the detail dialog when the list
    // endpoint did not embed it
    let detail_restoration = RwSignal::new(None::<Restoration>);

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
        draft_good.set(String::new());
        draft_defec.set(String::new());
        form_error.set(None);
        field_errors.set(BTreeMap::new());
        saving.set(false);
        detail_restoration.set(None);
    });

    let open_detail = move |record: Lending| {
        detail_restoration.set(record.restoration.clone());
        let lending_id = record.id.clone();
        let fetch_needed = record.restoration.is_none();
        modal.set(ModalIntent::Edit(record));
        if fetch_needed {
            spawn_local(async move {
                if let Ok(found) = restoration::api::find_by_lending(&client, &lending_id).await {
                    let _ = detail_restoration.try_set(found);
                }
            });
        }
    };

    let open_return = move |record: Lending| {
        draft_good.set(record.total_stuff.to_string());
        draft_defec.set("0".to_string());
        modal.set(ModalIntent::Action(record));
    };

    let on_good_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let (Ok(good), ModalIntent::Action(record)) =
            (value.trim().parse::<i64>(), modal.get_untracked())
        {
            draft_defec.set(complement_return_field(good, record.total_stuff).to_string());
        }
        draft_good.set(value);
    };

    let on_defec_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let (Ok(defec), ModalIntent::Action(record)) =
            (value.trim().parse::<i64>(), modal.get_untracked())
        {
            draft_good.set(complement_return_field(defec, record.total_stuff).to_string());
        }
        draft_defec.set(value);
    };

    let submit_return = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = match modal.get_untracked() {
            ModalIntent::Action(record) => record,
            _ => return,
        };
        let (good, defec) = match parse_return_split(
            &draft_good.get_untracked(),
            &draft_defec.get_untracked(),
        ) {
            Ok(split) => split,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        if let Err(message) = validate_return(good, defec, target.total_stuff) {
            form_error.set(Some(message));
            return;
        }
        let payload = RestorationPayload {
            lending_id: target.id.clone(),
            total_good_stuff: good,
            total_defec_stuff: defec,
        };

        spawn_local(async move {
            saving.set(true);
            form_error.set(None);
            field_errors.set(BTreeMap::new());

            match restoration::api::create(&client, &payload).await {
                Ok(()) => {
                    close_modal.run(());
                    alert.show("Return recorded");
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

    let stats = Signal::derive(move || LendingStats::from_items(&state.items.get()));

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
                <h1>"Lending History"</h1>
                <div class="page-header__actions">
                    <button class="button button--secondary" on:click=on_export>
                        {icon("download")}
                        " Export"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Lendings".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().total))
                    tone=StatTone::Primary
                />
                <StatCard
                    label="Returned".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().returned))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Still Borrowed".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().borrowed))
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Items Out".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || state.is_loaded.get().then(|| stats.get().total_items))
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
                        placeholder="Search by item, borrower or id..."
                        prop:value=move || state.search_query.get()
                        on:input=move |ev| state.search_query.set(event_target_value(&ev))
                    />
                </div>
                <select
                    class="form-control list-controls__filter"
                    prop:value=move || state.filter_status.get()
                    on:change=move |ev| state.filter_status.set(event_target_value(&ev))
                >
                    <option value="all">"All statuses"</option>
                    <option value="borrowed">"Borrowed"</option>
                    <option value="returned">"Returned"</option>
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("name")>
                            "Item"
                            {move || get_sort_indicator(&state.sort_field.get(), "name", state.sort_ascending.get())}
                        </th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("borrower")>
                            "Borrower"
                            {move || get_sort_indicator(&state.sort_field.get(), "borrower", state.sort_ascending.get())}
                        </th>
                        <th>"Quantity"</th>
                        <th class="data-table__sortable" on:click=move |_| state.toggle_sort("date")>
                            "Date"
                            {move || get_sort_indicator(&state.sort_field.get(), "date", state.sort_ascending.get())}
                        </th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .derived()
                            .into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                let returned = record.is_returned();
                                let detail_record = record.clone();
                                let return_record = record.clone();
                                let name = record.stuff_name().unwrap_or("-").to_string();
                                let date = record
                                    .timestamp()
                                    .map(format_date)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>{name}</td>
                                        <td>{record.name.clone()}</td>
                                        <td>{record.total_stuff}</td>
                                        <td>{date}</td>
                                        <td>
                                            <span class=if returned {
                                                "badge badge--success"
                                            } else {
                                                "badge badge--warning"
                                            }>
                                                {if returned { "Returned" } else { "Borrowed" }}
                                            </span>
                                        </td>
                                        <td class="data-table__actions">
                                            <button
                                                class="button button--small button--secondary"
                                                on:click=move |_| open_detail(detail_record.clone())
                                            >
                                                "Details"
                                            </button>
                                            <button
                                                class="button button--small button--primary"
                                                disabled=returned
                                                on:click=move |_| open_return(return_record.clone())
                                            >
                                                "Return"
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
                        view! { <div class="list-empty">"No lendings recorded yet."</div> }
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
                ModalIntent::Action(record) => {
                    let borrowed = record.total_stuff;
                    let name = record.stuff_name().unwrap_or("-").to_string();
                    let borrower = record.name.clone();
                    view! {
                        <Modal title="Return Items".to_string() on_close=close_modal>
                            <form on:submit=submit_return>
                                {move || {
                                    form_error.get().map(|message| view! {
                                        <div class="alert alert--error">{message}</div>
                                    })
                                }}
                                <p class="modal-subject">
                                    {borrower.clone()} " returns " {borrowed} " x " {name.clone()}
                                </p>
                                <label class="form-label">"In good condition"</label>
                                <input
                                    type="number"
                                    min="0"
                                    class="form-control"
                                    prop:value=move || draft_good.get()
                                    on:input=on_good_input
                                />
                                {field_messages("total_good_stuff")}
                                <label class="form-label">"Defective"</label>
                                <input
                                    type="number"
                                    min="0"
                                    class="form-control"
                                    prop:value=move || draft_defec.get()
                                    on:input=on_defec_input
                                />
                                {field_messages("total_defec_stuff")}
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                >
                                    "Record return"
                                </button>
                            </form>
                        </Modal>
                    }
                    .into_any()
                }
                ModalIntent::Edit(record) => {
                    let name = record.stuff_name().unwrap_or("-").to_string();
                    let note = record
                        .note
                        .clone()
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| "-".to_string());
                    let date = record
                        .timestamp()
                        .map(format_date)
                        .unwrap_or_else(|| "-".to_string());
                    view! {
                        <Modal title="Lending Details".to_string() on_close=close_modal>
                            <dl class="detail-list">
                                <dt>"Item"</dt>
                                <dd>{name}</dd>
                                <dt>"Borrower"</dt>
                                <dd>{record.name.clone()}</dd>
                                <dt>"Quantity"</dt>
                                <dd>{record.total_stuff}</dd>
                                <dt>"Date"</dt>
                                <dd>{date}</dd>
                                <dt>"Note"</dt>
                                <dd>{note}</dd>
                            </dl>
                            {move || match detail_restoration.get() {
                                Some(restoration) => {
                                    let returned_on = restoration
                                        .timestamp()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <dl class="detail-list">
                                            <dt>"Returned on"</dt>
                                            <dd>{returned_on}</dd>
                                            <dt>"Good"</dt>
                                            <dd>{restoration.total_good_stuff}</dd>
                                            <dt>"Defective"</dt>
                                            <dd>{restoration.total_defec_stuff}</dd>
                                        </dl>
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <p class="detail-list__status">"Not returned yet."</p>
                                }
                                .into_any(),
                            }}
                        </Modal>
                    }
                    .into_any()
                }
                _ => ().into_any(),
            }}
        </div>
    }
}
