use crate::{
    api::Role,
    state::session::{self, use_session},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

const BOTH: &[Role] = &[Role::User, Role::Admin];
const USER_ONLY: &[Role] = &[Role::User];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Master list, in display order. Visibility is the only thing filtered;
/// order is never rearranged per role.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        path: "/dashboard",
        icon: "fas fa-gauge",
        roles: BOTH,
    },
    NavEntry {
        label: "My Leave",
        path: "/leave",
        icon: "fas fa-umbrella-beach",
        roles: USER_ONLY,
    },
    NavEntry {
        label: "Request Leave",
        path: "/leave/request",
        icon: "fas fa-calendar-plus",
        roles: USER_ONLY,
    },
    NavEntry {
        label: "Leave History",
        path: "/leave/history",
        icon: "fas fa-clock-rotate-left",
        roles: USER_ONLY,
    },
    NavEntry {
        label: "Admin",
        path: "/admin",
        icon: "fas fa-shield-halved",
        roles: ADMIN_ONLY,
    },
    NavEntry {
        label: "Users",
        path: "/admin/users",
        icon: "fas fa-users",
        roles: ADMIN_ONLY,
    },
    NavEntry {
        label: "Leave Requests",
        path: "/admin/leave",
        icon: "fas fa-inbox",
        roles: ADMIN_ONLY,
    },
    NavEntry {
        label: "Statistics",
        path: "/admin/statistics",
        icon: "fas fa-chart-column",
        roles: ADMIN_ONLY,
    },
    NavEntry {
        label: "Profile",
        path: "/profile",
        icon: "fas fa-user",
        roles: BOTH,
    },
];

/// Pure builder: same role in, same ordered entries out. A missing role
/// (no identity yet) gets no entries.
pub fn nav_entries_for(role: Option<Role>) -> Vec<&'static NavEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAV_ENTRIES
        .iter()
        .filter(|entry| entry.roles.contains(&role))
        .collect()
}

fn nav_link_class() -> &'static str {
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
}

#[component]
pub fn Header() -> impl IntoView {
    let (session, _) = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let entries = create_memo(move |_| nav_entries_for(session.get().role()));
    let is_authenticated = create_memo(move |_| session.get().is_authenticated());

    let logout_action = session::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"LeaveDesk"</h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {move || entries.get().iter().copied().map(|entry| view! {
                                <a href=entry.path class=nav_link_class()>
                                    <i class=format!("{} mr-1", entry.icon)></i>
                                    {entry.label}
                                </a>
                            }).collect_view()}
                            <Show when=move || is_authenticated.get()>
                                <button
                                    on:click=on_logout
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <i class="fas fa-bars h-6 w-6"></i>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || entries.get().iter().copied().map(|entry| view! {
                                <a
                                    href=entry.path
                                    class=format!("block {}", nav_link_class())
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    <i class=format!("{} mr-1", entry.icon)></i>
                                    {entry.label}
                                </a>
                            }).collect_view()}
                            <Show when=move || is_authenticated.get()>
                                <button
                                    on:click=on_logout
                                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::{admin_identity, member_identity, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_admin_links_for_admin() {
        let html = render_to_string(move || {
            provide_session(Some(admin_identity()), false);
            view! { <Header /> }
        });
        assert!(html.contains("/admin/users"));
        assert!(html.contains("Statistics"));
    }

    #[test]
    fn header_hides_admin_links_for_member() {
        let html = render_to_string(move || {
            provide_session(Some(member_identity()), false);
            view! { <Header /> }
        });
        assert!(!html.contains("/admin/users"));
        assert!(html.contains("Request Leave"));
    }

    #[test]
    fn header_shows_no_entries_without_identity() {
        let html = render_to_string(move || {
            provide_session(None, false);
            view! { <Header /> }
        });
        assert!(!html.contains("/dashboard"));
        assert!(!html.contains("Sign out"));
    }
}
