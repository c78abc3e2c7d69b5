use contracts::domain::lending::LendingPayload;
use contracts::domain::stuff::Stuff;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::domain::lending::api;
use crate::domain::stuff::ui::list::state::StuffListState;
use crate::domain::stuff::{api as stuff_api, StuffStatus};
use crate::shared::alert::{FlashAlert, FlashBanner};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, get_sort_indicator, ListEmptyState};
use crate::shared::modal::{Modal, ModalIntent};

/// Staff borrowing page: the same item table as the admin side, but the
/// only action is opening the borrow dialog. Out-of-stock items keep their
/// row with the action disabled.
#[component]
pub fn BorrowList() -> impl IntoView {
    let client = use_api();
    let state = StuffListState::new();
    let alert = FlashAlert::new();

    let modal = RwSignal::new(ModalIntent::<Stuff>::Closed);
    let page_error = RwSignal::new(None::<String>);

    let draft_borrower = RwSignal::new(String::new());
    let draft_total = RwSignal::new(String::new());
    let draft_note = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(BTreeMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let load_items = move || {
        spawn_local(async move {
            match stuff_api::list(&client).await {
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
        draft_borrower.set(String::new());
        draft_total.set(String::new());
        draft_note.set(String::new());
        form_error.set(None);
        field_errors.set(BTreeMap::new());
        saving.set(false);
    });

    let submit_borrow = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = match modal.get_untracked() {
            ModalIntent::Action(item) => item,
            _ => return,
        };
        let borrower = draft_borrower.get_untracked().trim().to_string();
        if borrower.is_empty() {
            form_error.set(Some("Borrower name is required".to_string()));
            return;
        }
        let total = match draft_total.get_untracked().trim().parse::<i64>() {
            Ok(total) if total > 0 => total,
            _ => {
                form_error.set(Some("Quantity must be a positive number".to_string()));
                return;
            }
        };
        if total > target.available() {
            form_error.set(Some(format!(
                "Only {} available for \"{}\"",
                target.available(),
                target.name
            )));
            return;
        }
        let payload = LendingPayload {
            stuff_id: target.id.clone(),
            name: borrower,
            total_stuff: total,
            note: draft_note.get_untracked().trim().to_string(),
        };

        spawn_local(async move {
            saving.set(true);
            form_error.set(None);
            field_errors.set(BTreeMap::new());

            match api::create(&client, &payload).await {
                Ok(()) => {
                    close_modal.run(());
                    alert.show("Borrowing recorded");
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
                <h1>"Borrow Items"</h1>
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
                            .map(|(index, item)| {
                                let status = StuffStatus::of(&item);
                                let out_of_stock = item.available() <= 0;
                                let borrow_item = item.clone();
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.stuff_type.clone()}</td>
                                        <td>{item.available()}</td>
                                        <td>
                                            <span class=status.badge_class()>{status.label()}</span>
                                        </td>
                                        <td class="data-table__actions">
                                            <button
                                                class="button button--small button--primary"
                                                disabled=out_of_stock
                                                on:click=move |_| modal.set(ModalIntent::Action(borrow_item.clone()))
                                            >
                                                "Borrow"
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
                        view! { <div class="list-empty">"No items to borrow."</div> }.into_any(),
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
                ModalIntent::Action(item) => {
                    let name = item.name.clone();
                    let available = item.available();
                    view! {
                        <Modal title="Borrow Item".to_string() on_close=close_modal>
                            <form on:submit=submit_borrow>
                                {move || {
                                    form_error.get().map(|message| view! {
                                        <div class="alert alert--error">{message}</div>
                                    })
                                }}
                                <p class="modal-subject">
                                    {name.clone()} " (" {available} " available)"
                                </p>
                                <label class="form-label">"Borrower name"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    prop:value=move || draft_borrower.get()
                                    on:input=move |ev| draft_borrower.set(event_target_value(&ev))
                                />
                                {field_messages("name")}
                                <label class="form-label">"Quantity"</label>
                                <input
                                    type="number"
                                    min="1"
                                    class="form-control"
                                    prop:value=move || draft_total.get()
                                    on:input=move |ev| draft_total.set(event_target_value(&ev))
                                />
                                {field_messages("total_stuff")}
                                <label class="form-label">"Note"</label>
                                <textarea
                                    class="form-control"
                                    prop:value=move || draft_note.get()
                                    on:input=move |ev| draft_note.set(event_target_value(&ev))
                                ></textarea>
                                {field_messages("note")}
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                >
                                    "Borrow"
                                </button>
                            </form>
                        </Modal>
                    }
                    .into_any()
                }
                _ => ().into_any(),
            }}
        </div>
    }
}
