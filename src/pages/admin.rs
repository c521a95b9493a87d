use crate::{
    api::ApiClient,
    components::{
        cards::StatCard,
        layout::{ErrorMessage, LoadingSpinner, Shell},
    },
};
use leptos::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let stats = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.leave_statistics().await }
        },
    );

    let stat = move |pick: fn(&crate::api::LeaveStatistics) -> i64| {
        Signal::derive(move || {
            stats
                .get()
                .and_then(|res| res.ok())
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "-".into())
        })
    };
    let employees = stat(|s| s.total_users);
    let pending = stat(|s| s.pending_requests);
    let total = stat(|s| s.total_requests);

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Admin Overview"</h2>

                {move || match stats.get() {
                    Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(_)) => ().into_view(),
                }}

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <StatCard label="Employees" value=employees />
                    <StatCard label="Pending requests" value=pending />
                    <StatCard label="Total requests" value=total />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <a href="/admin/leave" class="bg-surface-elevated shadow rounded-lg p-6 hover:bg-surface-muted">
                        <i class="fas fa-clipboard-check text-action-primary-bg mb-2"></i>
                        <h3 class="text-lg font-medium text-fg">"Review requests"</h3>
                        <p class="text-sm text-fg-muted">"Approve or reject pending leave."</p>
                    </a>
                    <a href="/admin/users" class="bg-surface-elevated shadow rounded-lg p-6 hover:bg-surface-muted">
                        <i class="fas fa-users text-action-primary-bg mb-2"></i>
                        <h3 class="text-lg font-medium text-fg">"Employees"</h3>
                        <p class="text-sm text-fg-muted">"Browse the employee directory."</p>
                    </a>
                    <a href="/admin/statistics" class="bg-surface-elevated shadow rounded-lg p-6 hover:bg-surface-muted">
                        <i class="fas fa-chart-column text-action-primary-bg mb-2"></i>
                        <h3 class="text-lg font-medium text-fg">"Statistics"</h3>
                        <p class="text-sm text-fg-muted">"Leave usage across the company."</p>
                    </a>
                </div>
            </div>
        </Shell>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::{admin_identity, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_overview_renders_cards_and_links() {
        let html = render_to_string(move || {
            provide_session(Some(admin_identity()), false);
            view! { <AdminPage /> }
        });
        assert!(html.contains("Admin Overview"));
        assert!(html.contains("Review requests"));
        assert!(html.contains("/admin/statistics"));
    }
}
