use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let navigate = navigate.clone();
        spawn_local(async move {
            set_submitting.set(true);
            set_error.set(None);

            match api::login(username.get_untracked(), password.get_untracked()).await {
                Ok(data) => {
                    let home = data.user.role.home_path();
                    session.establish(data.access_token, data.user);
                    navigate(home, Default::default());
                }
                Err(message) => {
                    let _ = set_error.try_set(Some(message));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Welcome Back"</h2>
                <p class="login-card__subtitle">"Sign in to continue to Inventory System"</p>

                {move || {
                    error.get().map(|message| view! {
                        <div class="alert alert--error">{message}</div>
                    })
                }}

                <form on:submit=submit>
                    <label class="form-label" for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class="form-control"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />

                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="form-control"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button
                        type="submit"
                        class="button button--primary login-card__submit"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
