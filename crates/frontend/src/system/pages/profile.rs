use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Shows the identity persisted with the session. No fetch: the profile
/// is whatever login stored.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    move || {
        let user = session.get().user;
        match user {
            Some(user) => {
                let email = user.email.clone().unwrap_or_else(|| "-".to_string());
                view! {
                    <div class="profile-page">
                        <div class="profile-card">
                            <div class="profile-card__avatar">{icon("user")}</div>
                            <h2>{user.username.clone()}</h2>
                            <p class="profile-card__email">{email}</p>
                            <p class="profile-card__role">{user.role.as_str()}</p>
                            <span class="badge badge--secondary">{user.id.clone()}</span>
                            <div class="profile-card__actions">
                                <button class="button button--danger" on:click=logout.clone()>
                                    "Logout"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }
            None => view! { <div class="profile-page">"Not signed in."</div> }.into_any(),
        }
    }
}
