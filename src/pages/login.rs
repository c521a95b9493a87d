use crate::{
    api::LoginRequest,
    components::{forms, layout::ErrorMessage},
    state::session,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let login_action = session::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => error.set(Some(err.message)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(msg) = forms::validate_credentials(&email_value, &password_value) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full bg-surface-elevated shadow rounded-lg p-8 space-y-6">
                <h2 class="text-2xl font-bold text-fg text-center">"Sign in to LeaveDesk"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </Show>
                <form class="space-y-4" on:submit=on_submit>
                    <forms::TextField label="Email" input_type="email" value=email />
                    <forms::TextField label="Password" input_type="password" value=password />
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-sm text-fg-muted text-center">
                    "No account yet? "
                    <a href="/register" class="text-action-primary-bg hover:underline">"Register"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::provide_anonymous_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_renders_credential_form() {
        let html = render_to_string(move || {
            provide_anonymous_session(false);
            view! { <LoginPage /> }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("Password"));
        assert!(html.contains("/register"));
    }
}
