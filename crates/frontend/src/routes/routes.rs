use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::OverviewDashboard;
use crate::domain::inbound::ui::list::InboundList;
use crate::domain::lending::ui::borrow::BorrowList;
use crate::domain::lending::ui::history::LendingHistory;
use crate::domain::stuff::ui::list::StuffList;
use crate::layout::Template;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{
    RedirectIfAuthenticated, RequireAdmin, RequireSession, RequireStaff,
};
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;

/// Root and unknown paths go to the role's home, or to login.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = use_session();

    move || match session.get().role() {
        Some(role) => view! { <Redirect path=role.home_path() /> }.into_any(),
        None => view! { <Redirect path="/login" /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=HomeRedirect>
                <Route path=path!("/") view=HomeRedirect />

                <ParentRoute path=path!("/login") view=RedirectIfAuthenticated>
                    <Route path=path!("") view=LoginPage />
                </ParentRoute>

                <ParentRoute path=path!("/profile") view=RequireSession>
                    <ParentRoute path=path!("") view=Template>
                        <Route path=path!("") view=ProfilePage />
                    </ParentRoute>
                </ParentRoute>

                <ParentRoute path=path!("/admin") view=RequireAdmin>
                    <ParentRoute path=path!("") view=Template>
                        <Route path=path!("dashboard") view=OverviewDashboard />
                        <Route path=path!("stuffs") view=StuffList />
                        <Route path=path!("inbound") view=InboundList />
                    </ParentRoute>
                </ParentRoute>

                <ParentRoute path=path!("/staff") view=RequireStaff>
                    <ParentRoute path=path!("") view=Template>
                        <Route path=path!("dashboard") view=OverviewDashboard />
                        <Route path=path!("lendings") view=BorrowList />
                        <Route path=path!("lending-data") view=LendingHistory />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
