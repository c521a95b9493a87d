use crate::{components::layout::LoadingSpinner, state::session::use_session};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const AUTHENTICATED_LANDING_PATH: &str = "/dashboard";

/// Outcome of a guard evaluation. `Wait` covers both the pending session
/// resolution and the frame in which a redirect is in flight; in neither
/// case may protected content be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Wait,
    Render,
    RedirectTo(&'static str),
}

pub fn decide_protected(loading: bool, authenticated: bool) -> GuardAction {
    if loading {
        GuardAction::Wait
    } else if !authenticated {
        GuardAction::RedirectTo(LOGIN_PATH)
    } else {
        GuardAction::Render
    }
}

pub fn decide_auth_page(loading: bool, authenticated: bool) -> GuardAction {
    if loading {
        GuardAction::Wait
    } else if authenticated {
        GuardAction::RedirectTo(AUTHENTICATED_LANDING_PATH)
    } else {
        GuardAction::Render
    }
}

pub fn decide_admin(loading: bool, authenticated: bool, is_admin: bool) -> GuardAction {
    if loading {
        GuardAction::Wait
    } else if !authenticated {
        GuardAction::RedirectTo(LOGIN_PATH)
    } else if !is_admin {
        GuardAction::RedirectTo(AUTHENTICATED_LANDING_PATH)
    } else {
        GuardAction::Render
    }
}

fn redirect(target: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
}

/// Renders children only for authenticated sessions. The redirect is a
/// post-render side effect: the effect re-runs on every session change,
/// superseding any earlier decision, so a transition fires at most one
/// redirect and no stale intent survives a state change.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let decision = create_memo(move |_| {
        let state = session.get();
        decide_protected(state.loading, state.is_authenticated())
    });
    create_effect(move |_| {
        if let GuardAction::RedirectTo(target) = decision.get() {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardAction::Render
            fallback=move || view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}

/// Admin-only variant: unauthenticated sessions go to login, authenticated
/// non-admins to the regular landing page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let decision = create_memo(move |_| {
        let state = session.get();
        decide_admin(state.loading, state.is_authenticated(), state.is_admin())
    });
    create_effect(move |_| {
        if let GuardAction::RedirectTo(target) = decision.get() {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardAction::Render
            fallback=move || view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}

/// Wraps auth pages (login, register): an already-authenticated visitor is
/// sent to the authenticated landing page instead.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let decision = create_memo(move |_| {
        let state = session.get();
        decide_auth_page(state.loading, state.is_authenticated())
    });
    create_effect(move |_| {
        if let GuardAction::RedirectTo(target) = decision.get() {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardAction::Render
            fallback=move || view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::{
        admin_identity, member_identity, provide_anonymous_session, provide_session,
    };
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_session(Some(member_identity()), false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_anonymous_session(false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_anonymous_session(true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admin() {
        let html = render_to_string(move || {
            provide_session(Some(admin_identity()), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-only"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-only"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_user() {
        let html = render_to_string(move || {
            provide_session(Some(member_identity()), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-only"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-only"));
    }

    #[test]
    fn auth_page_hides_form_for_authenticated_session() {
        let html = render_to_string(move || {
            provide_session(Some(member_identity()), false);
            view! {
                <RedirectIfAuthenticated>
                    {|| view! { <div>"login-form"</div> }}
                </RedirectIfAuthenticated>
            }
        });
        assert!(!html.contains("login-form"));
    }

    #[test]
    fn auth_page_renders_form_for_anonymous_visitor() {
        let html = render_to_string(move || {
            provide_anonymous_session(false);
            view! {
                <RedirectIfAuthenticated>
                    {|| view! { <div>"login-form"</div> }}
                </RedirectIfAuthenticated>
            }
        });
        assert!(html.contains("login-form"));
    }
}
