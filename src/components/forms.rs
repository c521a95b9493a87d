use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg-muted mb-1">{label}</label>
            <input
                type=input_type
                class="w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded px-3 py-2"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg-muted mb-1">{label}</label>
            <textarea
                class="w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded px-3 py-2"
                rows=3
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg-muted mb-1">{label}</label>
            <select
                class="w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded px-3 py-2"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options.into_iter().map(|(option_value, option_label)| view! {
                    <option value=option_value selected=move || value.get() == option_value>
                        {option_label}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email address".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your name".into());
    }
    validate_credentials(email, password)?;
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".into());
    }
    if password != confirm {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

/// Parses and validates a leave date range from raw input values.
pub fn validate_leave_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
        .map_err(|_| "Please choose a start date".to_string())?;
    let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
        .map_err(|_| "Please choose an end date".to_string())?;
    if end < start {
        return Err("The end date cannot be before the start date".into());
    }
    Ok((start, end))
}
