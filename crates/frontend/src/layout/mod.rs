pub mod navbar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use self::navbar::Navbar;

/// Shell for the authenticated area: top navbar, routed content below.
#[component]
pub fn Template() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Navbar />
            <main class="app-shell__content">
                <Outlet />
            </main>
        </div>
    }
}
