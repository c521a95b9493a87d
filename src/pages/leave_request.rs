use crate::{
    api::{ApiClient, CreateLeaveRequest, LeaveType},
    components::{
        forms,
        layout::{ErrorMessage, Shell, SuccessMessage},
    },
    utils::format,
};
use leptos::{ev::SubmitEvent, *};

/// Assembles the request payload from raw form values.
pub fn build_leave_request(
    leave_type: &str,
    start: &str,
    end: &str,
    reason: &str,
) -> Result<CreateLeaveRequest, String> {
    let leave_type = LeaveType::parse(leave_type).ok_or("Please choose a leave type")?;
    let (start_date, end_date) = forms::validate_leave_range(start, end)?;
    let reason = reason.trim();
    Ok(CreateLeaveRequest {
        leave_type,
        start_date,
        end_date,
        reason: (!reason.is_empty()).then(|| reason.to_string()),
    })
}

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    let leave_type = create_rw_signal(String::from("annual"));
    let start = create_rw_signal(String::new());
    let end = create_rw_signal(String::new());
    let reason = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let api = use_context::<ApiClient>().unwrap_or_default();
    let submit_action = create_action(move |request: &CreateLeaveRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { api.create_leave_request(&payload).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(created) => {
                    error.set(None);
                    success.set(Some(format!(
                        "Requested {} of {}.",
                        format::format_day_count(created.days),
                        created.leave_type.label().to_lowercase(),
                    )));
                    start.set(String::new());
                    end.set(String::new());
                    reason.set(String::new());
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.message));
                }
            }
        }
    });

    let day_preview = move || {
        forms::validate_leave_range(&start.get(), &end.get())
            .map(|(s, e)| format::format_day_count(format::inclusive_days(s, e)))
            .unwrap_or_default()
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match build_leave_request(
            &leave_type.get_untracked(),
            &start.get_untracked(),
            &end.get_untracked(),
            &reason.get_untracked(),
        ) {
            Ok(request) => {
                error.set(None);
                success.set(None);
                submit_action.dispatch(request);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let type_options: Vec<(&'static str, &'static str)> = LeaveType::ALL
        .iter()
        .map(|ty| (ty.as_str(), ty.label()))
        .collect();

    view! {
        <Shell>
            <div class="max-w-2xl space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Request Leave"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </Show>
                <Show when=move || success.get().is_some()>
                    <SuccessMessage message={success.get().unwrap_or_default()} />
                </Show>
                <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                    <forms::SelectField label="Leave type" value=leave_type options=type_options />
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <forms::TextField label="Start date" input_type="date" value=start />
                        <forms::TextField label="End date" input_type="date" value=end />
                    </div>
                    <Show when=move || !day_preview().is_empty()>
                        <p class="text-sm text-fg-muted">{move || format!("Duration: {}", day_preview())}</p>
                    </Show>
                    <forms::TextAreaField label="Reason" value=reason />
                    <button
                        type="submit"
                        class="inline-flex items-center px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </form>
            </div>
        </Shell>
    }
}
