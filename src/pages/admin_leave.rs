use crate::{
    api::{ApiClient, LeaveDecisionRequest, LeaveStatus},
    components::{
        cards::StatusBadge,
        forms::{SelectField, TextField},
        layout::{EmptyState, ErrorMessage, LoadingSpinner, Shell},
    },
    utils::format,
};
use leptos::*;

/// Maps the filter select value to an optional status, "all" meaning no filter.
pub fn parse_status_filter(raw: &str) -> Option<LeaveStatus> {
    match raw {
        "pending" => Some(LeaveStatus::Pending),
        "approved" => Some(LeaveStatus::Approved),
        "rejected" => Some(LeaveStatus::Rejected),
        "cancelled" => Some(LeaveStatus::Cancelled),
        _ => None,
    }
}

pub fn build_decision(status: LeaveStatus, comment: &str) -> LeaveDecisionRequest {
    let comment = comment.trim();
    LeaveDecisionRequest {
        status,
        decision_comment: (!comment.is_empty()).then(|| comment.to_string()),
    }
}

#[component]
pub fn AdminLeavePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let filter = create_rw_signal(String::from("pending"));
    let comment = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let api_for_list = api.clone();
    let requests = create_resource(
        move || filter.get(),
        move |filter| {
            let api = api_for_list.clone();
            async move { api.admin_leave_requests(parse_status_filter(&filter)).await }
        },
    );

    let decide_action = create_action(move |input: &(String, LeaveDecisionRequest)| {
        let api = api.clone();
        let (id, decision) = input.clone();
        async move { api.decide_leave_request(&id, &decision).await }
    });
    let decide_pending = decide_action.pending();

    create_effect(move |_| {
        if let Some(result) = decide_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    comment.set(String::new());
                    requests.refetch();
                }
                Err(err) => error.set(Some(err.message)),
            }
        }
    });

    let on_decide = move |id: String, status: LeaveStatus| {
        if decide_pending.get_untracked() {
            return;
        }
        let decision = build_decision(status, &comment.get_untracked());
        decide_action.dispatch((id, decision));
    };

    let filter_options = vec![
        ("pending", "Pending"),
        ("approved", "Approved"),
        ("rejected", "Rejected"),
        ("cancelled", "Cancelled"),
        ("all", "All"),
    ];

    view! {
        <Shell>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Review Leave Requests"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </Show>
                <div class="max-w-xs">
                    <SelectField label="Status" value=filter options=filter_options />
                </div>
                <div class="max-w-xl">
                    <TextField
                        label="Decision comment"
                        placeholder="Optional note sent with the next decision"
                        value=comment
                    />
                </div>
                <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                    {move || match requests.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        Some(Ok(list)) if list.is_empty() => {
                            view! { <EmptyState message="No leave requests match this filter." /> }.into_view()
                        }
                        Some(Ok(list)) => view! {
                            <table class="min-w-full divide-y divide-border">
                                <thead>
                                    <tr class="text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        <th class="px-4 py-3">"Employee"</th>
                                        <th class="px-4 py-3">"Type"</th>
                                        <th class="px-4 py-3">"Dates"</th>
                                        <th class="px-4 py-3">"Days"</th>
                                        <th class="px-4 py-3">"Reason"</th>
                                        <th class="px-4 py-3">"Status"</th>
                                        <th class="px-4 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {list.into_iter().map(|request| {
                                        let id = request.id.clone();
                                        let decidable = request.status == LeaveStatus::Pending;
                                        view! {
                                            <tr class="text-sm text-fg">
                                                <td class="px-4 py-3 font-medium">
                                                    {request.user_name.clone().unwrap_or_else(|| request.user_id.clone())}
                                                </td>
                                                <td class="px-4 py-3">{request.leave_type.label()}</td>
                                                <td class="px-4 py-3">
                                                    {format!(
                                                        "{} to {}",
                                                        format::format_date(request.start_date),
                                                        format::format_date(request.end_date),
                                                    )}
                                                </td>
                                                <td class="px-4 py-3">{request.days}</td>
                                                <td class="px-4 py-3 text-fg-muted">
                                                    {request.reason.clone().unwrap_or_else(|| "-".into())}
                                                </td>
                                                <td class="px-4 py-3"><StatusBadge status=request.status /></td>
                                                <td class="px-4 py-3 text-right">
                                                    <Show when=move || decidable>
                                                        {
                                                            let approve_id = id.clone();
                                                            let reject_id = id.clone();
                                                            view! {
                                                                <div class="flex justify-end gap-3">
                                                                    <button
                                                                        class="text-status-success-text hover:underline text-sm disabled:opacity-50"
                                                                        disabled=move || decide_pending.get()
                                                                        on:click=move |_| on_decide(approve_id.clone(), LeaveStatus::Approved)
                                                                    >
                                                                        "Approve"
                                                                    </button>
                                                                    <button
                                                                        class="text-status-error-text hover:underline text-sm disabled:opacity-50"
                                                                        disabled=move || decide_pending.get()
                                                                        on:click=move |_| on_decide(reject_id.clone(), LeaveStatus::Rejected)
                                                                    >
                                                                        "Reject"
                                                                    </button>
                                                                </div>
                                                            }
                                                        }
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view(),
                    }}
                </div>
            </div>
        </Shell>
    }
}
