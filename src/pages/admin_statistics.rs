use crate::{
    api::{ApiClient, LeaveStatistics, LeaveTypeCount},
    components::{
        cards::StatCard,
        layout::{EmptyState, ErrorMessage, LoadingSpinner, Shell},
    },
};
use leptos::*;

/// Share of `count` in `total` as a whole percentage, clamped to 0..=100.
pub fn share_percent(count: i64, total: i64) -> u32 {
    if total <= 0 || count <= 0 {
        return 0;
    }
    ((count * 100 + total / 2) / total).clamp(0, 100) as u32
}

#[component]
fn TypeDistribution(entries: Vec<LeaveTypeCount>, total: i64) -> impl IntoView {
    if entries.is_empty() {
        return view! { <EmptyState message="No leave requests recorded yet." /> }.into_view();
    }
    entries
        .into_iter()
        .map(|entry| {
            let percent = share_percent(entry.count, total);
            view! {
                <div class="space-y-1">
                    <div class="flex justify-between text-sm">
                        <span class="font-medium text-fg">{entry.leave_type.label()}</span>
                        <span class="text-fg-muted">{format!("{} ({percent}%)", entry.count)}</span>
                    </div>
                    <div class="h-2 rounded-full bg-surface-muted">
                        <div
                            class="h-2 rounded-full bg-action-primary-bg"
                            style=format!("width: {percent}%")
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn AdminStatisticsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let stats = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.leave_statistics().await }
        },
    );

    let stat = move |pick: fn(&LeaveStatistics) -> i64| {
        Signal::derive(move || {
            stats
                .get()
                .and_then(|res| res.ok())
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "-".into())
        })
    };
    let total = stat(|s| s.total_requests);
    let pending = stat(|s| s.pending_requests);
    let approved = stat(|s| s.approved_requests);
    let rejected = stat(|s| s.rejected_requests);

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Leave Statistics"</h2>

                <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                    <StatCard label="Total requests" value=total />
                    <StatCard label="Pending" value=pending />
                    <StatCard label="Approved" value=approved />
                    <StatCard label="Rejected" value=rejected />
                </div>

                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    <h3 class="text-lg font-medium text-fg">"Requests by type"</h3>
                    {move || match stats.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        Some(Ok(stats)) => view! {
                            <TypeDistribution entries=stats.by_type total=stats.total_requests />
                        }.into_view(),
                    }}
                </div>
            </div>
        </Shell>
    }
}
