use contracts::enums::role::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Top navigation. Link sets are an exhaustive mapping from role to its
/// route subtree, not per-link string checks.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| "User".to_string())
    };

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    let links = move || match session.get().role() {
        Some(Role::Admin) => view! {
            <A href="/admin/dashboard">"Dashboard"</A>
            <A href="/admin/stuffs">"Inventory"</A>
            <A href="/admin/inbound">"Inbound"</A>
        }
        .into_any(),
        Some(Role::Staff) => view! {
            <A href="/staff/dashboard">"Dashboard"</A>
            <A href="/staff/lendings">"Borrow"</A>
            <A href="/staff/lending-data">"Lending Data"</A>
        }
        .into_any(),
        None => view! { <></> }.into_any(),
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                {icon("box")}
                <span>"Inventory System"</span>
            </div>
            <div class="navbar__links">
                {links}
            </div>
            <div class="navbar__user">
                <A href="/profile">
                    {icon("user")}
                    <span>{username}</span>
                </A>
                <button class="button button--link navbar__logout" on:click=logout>
                    {icon("log-out")}
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
