use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_MS: u32 = 3_000;

/// Transient success notice with a fixed 3-second lifetime. A newer
/// message supersedes the pending dismissal of an older one, and a
/// dismissal arriving after unmount is discarded.
#[derive(Clone, Copy)]
pub struct FlashAlert {
    message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl FlashAlert {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.message.get()
    }

    pub fn show(&self, text: impl Into<String>) {
        let generation = self.generation;
        let current = generation.get_value() + 1;
        generation.set_value(current);
        self.message.set(Some(text.into()));

        let message = self.message;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            // only the latest alert may dismiss itself
            if generation.try_get_value() == Some(current) {
                let _ = message.try_set(None);
            }
        });
    }
}

impl Default for FlashAlert {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the alert when one is active.
#[component]
pub fn FlashBanner(alert: FlashAlert) -> impl IntoView {
    move || {
        alert
            .get()
            .map(|text| view! { <div class="alert alert--success">{text}</div> })
    }
}
