use crate::{
    api::{ApiClient, LeaveRequest, LeaveStatus},
    components::{
        cards::{StatCard, StatusBadge},
        layout::{EmptyState, ErrorMessage, LoadingSpinner, Shell},
    },
    state::session::use_session,
    utils::format,
};
use leptos::*;

pub fn pending_count(requests: &[LeaveRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Pending)
        .count()
}

pub fn approved_days(requests: &[LeaveRequest]) -> i64 {
    requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved)
        .map(|r| r.days)
        .sum()
}

/// Most recent requests first, capped for the dashboard widget.
pub fn recent_requests(requests: &[LeaveRequest], limit: usize) -> Vec<LeaveRequest> {
    let mut sorted: Vec<LeaveRequest> = requests.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (session, _) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };
    let is_admin = create_memo(move |_| session.get().is_admin());
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

    let pending = Signal::derive(move || {
        requests
            .get()
            .and_then(|res| res.ok())
            .map(|list| pending_count(&list).to_string())
            .unwrap_or_else(|| "-".into())
    });
    let taken = Signal::derive(move || {
        requests
            .get()
            .and_then(|res| res.ok())
            .map(|list| format::format_day_count(approved_days(&list)))
            .unwrap_or_else(|| "-".into())
    });

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">{greeting}</h2>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <StatCard label="Leave balance" value=balance />
                    <StatCard label="Pending requests" value=pending />
                    <StatCard label="Approved this year" value=taken />
                </div>

                <Show when=move || is_admin.get()>
                    <div class="bg-surface-elevated shadow rounded-lg p-6">
                        <h3 class="text-lg font-medium text-fg mb-2">"Administration"</h3>
                        <p class="text-sm text-fg-muted mb-3">
                            "Review pending leave requests and manage the team."
                        </p>
                        <a href="/admin" class="text-action-primary-bg hover:underline text-sm font-medium">
                            "Go to the admin area"
                        </a>
                    </div>
                </Show>

                <div class="bg-surface-elevated shadow rounded-lg p-6">
                    <h3 class="text-lg font-medium text-fg mb-4">"Recent requests"</h3>
                    {move || match requests.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        Some(Ok(list)) => {
                            let recent = recent_requests(&list, 5);
                            if recent.is_empty() {
                                view! { <EmptyState message="No leave requests yet." /> }.into_view()
                            } else {
                                recent.into_iter().map(|request| view! {
                                    <div class="flex items-center justify-between py-2 border-b border-border last:border-b-0">
                                        <div>
                                            <p class="text-sm font-medium text-fg">{request.leave_type.label()}</p>
                                            <p class="text-xs text-fg-muted">
                                                {format!(
                                                    "{} to {} ({})",
                                                    format::format_date(request.start_date),
                                                    format::format_date(request.end_date),
                                                    format::format_day_count(request.days),
                                                )}
                                            </p>
                                        </div>
                                        <StatusBadge status=request.status />
                                    </div>
                                }).collect_view()
                            }
                        }
                    }}
                </div>
            </div>
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LeaveType;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn request(id: &str, status: LeaveStatus, days: i64, created_hour: u32) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            user_id: "u1".into(),
            user_name: None,
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            days,
            reason: None,
            status,
            decision_comment: None,
            created_at: Utc
                .with_ymd_and_hms(2024, 3, 1, created_hour, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn counts_only_pending_requests() {
        let requests = vec![
            request("a", LeaveStatus::Pending, 2, 1),
            request("b", LeaveStatus::Approved, 3, 2),
            request("c", LeaveStatus::Pending, 1, 3),
        ];
        assert_eq!(pending_count(&requests), 2);
    }

    #[test]
    fn sums_days_of_approved_requests_only() {
        let requests = vec![
            request("a", LeaveStatus::Approved, 2, 1),
            request("b", LeaveStatus::Rejected, 9, 2),
            request("c", LeaveStatus::Approved, 3, 3),
        ];
        assert_eq!(approved_days(&requests), 5);
    }

    #[test]
    fn recent_requests_sorts_newest_first_and_caps() {
        let requests = vec![
            request("old", LeaveStatus::Pending, 1, 1),
            request("new", LeaveStatus::Pending, 1, 9),
            request("mid", LeaveStatus::Pending, 1, 5),
        ];
        let recent = recent_requests(&requests, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "new");
        assert_eq!(recent[1].id, "mid");
    }
}
