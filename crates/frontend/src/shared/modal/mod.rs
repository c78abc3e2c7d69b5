use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// The one modal dialog a page owns, expressed as a tagged state so that
/// invalid flag combinations cannot exist. `Action` carries the
/// resource-specific intent ("add stock", "return item").
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModalIntent<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
    Delete(T),
    Action(T),
}

impl<T> ModalIntent<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalIntent::Closed)
    }

    /// The record the dialog is bound to, if the intent targets one.
    pub fn selected(&self) -> Option<&T> {
        match self {
            ModalIntent::Closed | ModalIntent::Create => None,
            ModalIntent::Edit(record)
            | ModalIntent::Delete(record)
            | ModalIntent::Action(record) => Some(record),
        }
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes the dialog. The listener lives exactly as long as the
    // modal: removed (and the closure dropped) on unmount.
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    // `Closure` is not `Send`, so park it in thread-local storage to satisfy
    // `on_cleanup`'s bounds; it is dropped with the owning scope.
    let closure = StoredValue::new_local(closure);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            closure.with_value(|closure| {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            });
        }
    });

    // Closing via the backdrop follows the same path as the close button,
    // so draft state is always cleared by the page's close handler.
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_without_selection() {
        let intent: ModalIntent<u32> = ModalIntent::default();
        assert!(!intent.is_open());
        assert_eq!(intent.selected(), None);
    }

    #[test]
    fn record_bound_intents_expose_the_record() {
        assert_eq!(ModalIntent::Edit(7).selected(), Some(&7));
        assert_eq!(ModalIntent::Delete(7).selected(), Some(&7));
        assert_eq!(ModalIntent::Action(7).selected(), Some(&7));
        assert_eq!(ModalIntent::<u32>::Create.selected(), None);
    }

    #[test]
    fn open_states_report_open() {
        assert!(ModalIntent::<u32>::Create.is_open());
        assert!(ModalIntent::Edit(1).is_open());
        assert!(!ModalIntent::<u32>::Closed.is_open());
    }
}
