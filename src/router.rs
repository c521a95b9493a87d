use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RedirectIfAuthenticated, RequireAdmin, RequireAuth},
    pages::{
        admin::AdminPage, admin_leave::AdminLeavePage, admin_statistics::AdminStatisticsPage,
        admin_users::AdminUsersPage, dashboard::DashboardPage, home::HomePage,
        leave::LeavePage, leave_history::LeaveHistoryPage, leave_request::LeaveRequestPage,
        login::LoginPage, profile::ProfilePage, register::RegisterPage,
    },
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/dashboard",
    "/leave",
    "/leave/request",
    "/leave/history",
    "/profile",
    "/admin",
    "/admin/users",
    "/admin/leave",
    "/admin/statistics",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/leave",
    "/leave/request",
    "/leave/history",
    "/profile",
    "/admin",
    "/admin/users",
    "/admin/leave",
    "/admin/statistics",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/users",
    "/admin/leave",
    "/admin/statistics",
];

pub const AUTH_ROUTE_PATHS: &[&str] = &["/login", "/register"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=GuardedLogin/>
                    <Route path="/register" view=GuardedRegister/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/leave" view=ProtectedLeave/>
                    <Route path="/leave/request" view=ProtectedLeaveRequest/>
                    <Route path="/leave/history" view=ProtectedLeaveHistory/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/admin" view=AdminOnlyOverview/>
                    <Route path="/admin/users" view=AdminOnlyUsers/>
                    <Route path="/admin/leave" view=AdminOnlyLeave/>
                    <Route path="/admin/statistics" view=AdminOnlyStatistics/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn GuardedLogin() -> impl IntoView {
    view! { <RedirectIfAuthenticated><LoginPage/></RedirectIfAuthenticated> }
}

#[component]
fn GuardedRegister() -> impl IntoView {
    view! { <RedirectIfAuthenticated><RegisterPage/></RedirectIfAuthenticated> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <RequireAuth><LeavePage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveRequest() -> impl IntoView {
    view! { <RequireAuth><LeaveRequestPage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveHistory() -> impl IntoView {
    view! { <RequireAuth><LeaveHistoryPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn AdminOnlyOverview() -> impl IntoView {
    view! { <RequireAdmin><AdminPage/></RequireAdmin> }
}

#[component]
fn AdminOnlyUsers() -> impl IntoView {
    view! { <RequireAdmin><AdminUsersPage/></RequireAdmin> }
}

#[component]
fn AdminOnlyLeave() -> impl IntoView {
    view! { <RequireAdmin><AdminLeavePage/></RequireAdmin> }
}

#[component]
fn AdminOnlyStatistics() -> impl IntoView {
    view! { <RequireAdmin><AdminStatisticsPage/></RequireAdmin> }
}
