use crate::api::LeaveStatus;
use leptos::*;

#[component]
pub fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
            </div>
        </div>
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            status.badge_class()
        )>
            {status.label()}
        </span>
    }
}
