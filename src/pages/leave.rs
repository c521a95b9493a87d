use crate::{
    api::{ApiClient, LeaveRequest, LeaveStatus},
    components::{
        cards::StatCard,
        layout::{ErrorMessage, LoadingSpinner, Shell},
    },
    state::session::use_session,
    utils::format,
};
use chrono::NaiveDate;
use leptos::*;

/// Next approved absence on or after `today`, earliest start wins.
pub fn upcoming_leave(requests: &[LeaveRequest], today: NaiveDate) -> Option<LeaveRequest> {
    requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved && r.end_date >= today)
        .min_by_key(|r| r.start_date)
        .cloned()
}

#[component]
pub fn LeavePage() -> impl IntoView {
    let (session, _) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let balance = Signal::derive(move || {
        session
            .get()
            .user
            .and_then(|u| u.leave_balance)
            .map(|days| format::format_day_count(days as i64))
            .unwrap_or_else(|| "-".into())
    });

    let requests = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.my_leave_requests().await }
        },
    );

    let upcoming = Signal::derive(move || {
        let today = chrono::Utc::now().date_naive();
        requests
            .get()
            .and_then(|res| res.ok())
            .and_then(|list| upcoming_leave(&list, today))
            .map(|r| {
                format!(
                    "{} from {}",
                    r.leave_type.label(),
                    format::format_date(r.start_date)
                )
            })
            .unwrap_or_else(|| "None scheduled".into())
    });

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"My Leave"</h2>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <StatCard label="Leave balance" value=balance />
                    <StatCard label="Next approved leave" value=upcoming />
                </div>

                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                    <h3 class="text-lg font-medium text-fg">"Quick actions"</h3>
                    <div class="flex flex-col sm:flex-row gap-3">
                        <a href="/leave/request" class="inline-flex items-center justify-center px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover">
                            <i class="fas fa-calendar-plus mr-2"></i>
                            "Request leave"
                        </a>
                        <a href="/leave/history" class="inline-flex items-center justify-center px-4 py-2 rounded-md text-sm font-medium border border-border text-fg bg-surface-elevated hover:bg-surface-muted">
                            <i class="fas fa-clock-rotate-left mr-2"></i>
                            "View history"
                        </a>
                    </div>
                </div>

                {move || match requests.get() {
                    Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(_)) => ().into_view(),
                }}
            </div>
        </Shell>
    }
}
