use crate::{components::layout::Shell, state::session::use_session, utils::format};
use leptos::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (session, _) = use_session();
    let user = create_memo(move |_| session.get().user);

    view! {
        <Shell>
            <div class="max-w-2xl space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Profile"</h2>
                {move || match user.get() {
                    None => view! {
                        <p class="text-sm text-fg-muted">"No profile loaded."</p>
                    }.into_view(),
                    Some(identity) => view! {
                        <div class="bg-surface-elevated shadow rounded-lg p-6">
                            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">"Name"</dt>
                                    <dd class="mt-1 text-sm text-fg">{identity.name.clone()}</dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">"Email"</dt>
                                    <dd class="mt-1 text-sm text-fg">{identity.email.clone()}</dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">"Role"</dt>
                                    <dd class="mt-1 text-sm text-fg">
                                        {if identity.role.is_admin() { "Administrator" } else { "Employee" }}
                                    </dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">"Department"</dt>
                                    <dd class="mt-1 text-sm text-fg">
                                        {identity.department.clone().unwrap_or_else(|| "-".into())}
                                    </dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">"Position"</dt>
                                    <dd class="mt-1 text-sm text-fg">
                                        {identity.position.clone().unwrap_or_else(|| "-".into())}
                                    </dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">"Leave balance"</dt>
                                    <dd class="mt-1 text-sm text-fg">
                                        {identity
                                            .leave_balance
                                            .map(|days| format::format_day_count(days as i64))
                                            .unwrap_or_else(|| "-".into())}
                                    </dd>
                                </div>
                            </dl>
                        </div>
                    }.into_view(),
                }}
            </div>
        </Shell>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::{admin_identity, member_identity, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_shows_identity_fields() {
        let html = render_to_string(move || {
            provide_session(Some(member_identity()), false);
            view! { <ProfilePage /> }
        });
        assert!(html.contains("Member Example"));
        assert!(html.contains("member@example.com"));
        assert!(html.contains("Engineering"));
        assert!(html.contains("Employee"));
    }

    #[test]
    fn profile_labels_admins() {
        let html = render_to_string(move || {
            provide_session(Some(admin_identity()), false);
            view! { <ProfilePage /> }
        });
        assert!(html.contains("Administrator"));
    }
}
