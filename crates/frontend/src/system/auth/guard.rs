use contracts::enums::role::Role;
use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use super::context::use_session;

/// Route subtree that requires any authenticated session.
#[component]
pub fn RequireSession() -> impl IntoView {
    let session = use_session();

    move || {
        if session.get().is_authenticated() {
            view! { <Outlet /> }.into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}

/// Route subtree restricted to one role. Wrong role is sent to its own
/// home, missing session to login.
#[component]
pub fn RequireRole(role: Role) -> impl IntoView {
    let session = use_session();

    move || match session.get().role() {
        None => view! { <Redirect path="/login" /> }.into_any(),
        Some(actual) if actual != role => {
            view! { <Redirect path=actual.home_path() /> }.into_any()
        }
        Some(_) => view! { <Outlet /> }.into_any(),
    }
}

/// Admin-only subtree (prop-less wrapper usable as a route view).
#[component]
pub fn RequireAdmin() -> impl IntoView {
    view! { <RequireRole role=Role::Admin /> }
}

/// Staff-only subtree (prop-less wrapper usable as a route view).
#[component]
pub fn RequireStaff() -> impl IntoView {
    view! { <RequireRole role=Role::Staff /> }
}

/// Wrapper for the login subtree: an already authenticated user is sent
/// straight to their role's home.
#[component]
pub fn RedirectIfAuthenticated() -> impl IntoView {
    let session = use_session();

    move || match session.get().role() {
        Some(role) => view! { <Redirect path=role.home_path() /> }.into_any(),
        None => view! { <Outlet /> }.into_any(),
    }
}
