use crate::{
    api::RegisterRequest,
    components::{forms, layout::ErrorMessage},
    state::session,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let department = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let register_action = session::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
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
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(msg) = forms::validate_registration(
            &name_value,
            &email_value,
            &password_value,
            &confirm.get_untracked(),
        ) {
            error.set(Some(msg));
            return;
        }
        let department_value = department.get_untracked();
        error.set(None);
        register_action.dispatch(RegisterRequest {
            name: name_value,
            email: email_value,
            password: password_value,
            department: (!department_value.trim().is_empty())
                .then(|| department_value.trim().to_string()),
        });
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full bg-surface-elevated shadow rounded-lg p-8 space-y-6">
                <h2 class="text-2xl font-bold text-fg text-center">"Create your account"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </Show>
                <form class="space-y-4" on:submit=on_submit>
                    <forms::TextField label="Name" value=name />
                    <forms::TextField label="Email" input_type="email" value=email />
                    <forms::TextField label="Department" value=department placeholder="Optional" />
                    <forms::TextField label="Password" input_type="password" value=password />
                    <forms::TextField label="Confirm password" input_type="password" value=confirm />
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="text-sm text-fg-muted text-center">
                    "Already registered? "
                    <a href="/login" class="text-action-primary-bg hover:underline">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
