use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::lead::{
    submit_lead, FieldErrors, LeadField, LeadSubmission, BUDGET_OPTIONS, REVENUE_OPTIONS,
    SERVICE_OPTIONS, TIMELINE_OPTIONS,
};

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub on_submit_success: Callback<()>,
}

fn input_value(e: &Event) -> String {
    let target = e.target();
    if let Some(input) = target.clone().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
        input.value()
    } else if let Some(area) = target
        .clone()
        .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
    {
        area.value()
    } else if let Some(select) = target.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
        select.value()
    } else {
        String::new()
    }
}

type FieldUpdate = fn(&mut LeadSubmission, String);

/// Lead with one field replaced, plus the error map without that field's
/// entry when it had one.
fn edit(
    lead: &LeadSubmission,
    errors: &FieldErrors,
    field: Option<LeadField>,
    update: FieldUpdate,
    value: String,
) -> (LeadSubmission, Option<FieldErrors>) {
    let mut next = lead.clone();
    update(&mut next, value);
    let remaining = field.filter(|f| errors.contains_key(f)).map(|f| {
        let mut remaining = errors.clone();
        remaining.remove(&f);
        remaining
    });
    (next, remaining)
}

fn commit(
    lead: &UseStateHandle<LeadSubmission>,
    errors: &UseStateHandle<FieldErrors>,
    field: Option<LeadField>,
    update: FieldUpdate,
    value: String,
) {
    let (next, remaining) = edit(lead, errors, field, update, value);
    lead.set(next);
    if let Some(remaining) = remaining {
        errors.set(remaining);
    }
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let lead = use_state(LeadSubmission::blank);
    let errors = use_state(FieldErrors::new);
    let submit_state = use_state(|| SubmitState::Idle);

    // Text fields commit on every keystroke so their error clears right away.
    let on_text = |field: Option<LeadField>, update: FieldUpdate| {
        let lead = lead.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| commit(&lead, &errors, field, update, input_value(&e)))
    };
    let on_select = |update: FieldUpdate| {
        let lead = lead.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| commit(&lead, &errors, None, update, input_value(&e)))
    };

    let on_name = on_text(Some(LeadField::Name), |l, v| l.name = v);
    let on_email = on_text(Some(LeadField::Email), |l, v| l.email = v);
    let on_phone = on_text(None, |l, v| l.phone = v);
    let on_company = on_text(Some(LeadField::Company), |l, v| l.company = v);
    let on_website = on_text(None, |l, v| l.website = v);
    let on_description = on_text(None, |l, v| l.description = v);
    let on_budget = on_select(|l, v| l.budget = v);
    let on_revenue = on_select(|l, v| l.revenue = v);
    let on_timeline = on_select(|l, v| l.timeline = v);

    let on_service = {
        let lead = lead.clone();
        let errors = errors.clone();
        move |service: &'static str| {
            let lead = lead.clone();
            let errors = errors.clone();
            Callback::from(move |_: Event| {
                let mut next = (*lead).clone();
                next.toggle_service(service);
                lead.set(next);
                if errors.contains_key(&LeadField::Services) {
                    let mut remaining = (*errors).clone();
                    remaining.remove(&LeadField::Services);
                    errors.set(remaining);
                }
            })
        }
    };

    let onsubmit = {
        let lead = lead.clone();
        let errors = errors.clone();
        let submit_state = submit_state.clone();
        let on_success = props.on_submit_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submit_state == SubmitState::Sending {
                return;
            }

            let found = lead.validate();
            if !found.is_empty() {
                info!("Lead form has {} invalid fields", found.len());
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            submit_state.set(SubmitState::Sending);

            let lead = lead.clone();
            let submit_state = submit_state.clone();
            let on_success = on_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_lead(&lead).await {
                    Ok(()) => {
                        lead.set(LeadSubmission::blank());
                        submit_state.set(SubmitState::Idle);
                        on_success.emit(());
                    }
                    Err(e) => {
                        warn!("Lead submission failed: {}", e);
                        submit_state.set(SubmitState::Failed);
                    }
                }
            });
        })
    };

    let error_for = |field: LeadField| -> Html {
        match errors.get(&field) {
            Some(message) => html! { <p class="field-error">{*message}</p> },
            None => html! {},
        }
    };
    let input_class =
        |field: LeadField| classes!("field", errors.contains_key(&field).then(|| "invalid"));

    let sending = *submit_state == SubmitState::Sending;

    html! {
        <form class="lead-form" {onsubmit} novalidate={true}>
            <style>
                {r#"
                .lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    text-align: left;
                }
                .lead-form .row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .lead-form label {
                    display: block;
                    margin-bottom: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #e5e7eb;
                }
                .lead-form .field {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 8px;
                    color: #fff;
                    box-sizing: border-box;
                }
                .lead-form .field.invalid {
                    border-color: #ef4444;
                }
                .lead-form .field-error {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #f87171;
                }
                .lead-form .services {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem 1rem;
                    color: #d1d5db;
                    font-size: 0.875rem;
                }
                .lead-form button {
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(90deg, #ea580c, #f97316);
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                    transition: transform 0.3s;
                }
                .lead-form button:hover {
                    transform: scale(1.02);
                }
                .lead-form button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .lead-form .submit-error {
                    color: #f87171;
                    text-align: center;
                }
                .lead-form .fine-print {
                    font-size: 0.75rem;
                    color: #9ca3af;
                    text-align: center;
                }
                @media (max-width: 640px) {
                    .lead-form .row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="row">
                <div>
                    <label for="name">{"Full Name"}</label>
                    <input id="name" type="text" class={input_class(LeadField::Name)}
                        value={lead.name.clone()} oninput={on_name} placeholder="John Doe" />
                    { error_for(LeadField::Name) }
                </div>
                <div>
                    <label for="email">{"Email Address"}</label>
                    <input id="email" type="email" class={input_class(LeadField::Email)}
                        value={lead.email.clone()} oninput={on_email} placeholder="john@example.com" />
                    { error_for(LeadField::Email) }
                </div>
            </div>
            <div class="row">
                <div>
                    <label for="phone">{"Phone"}</label>
                    <input id="phone" type="tel" class="field"
                        value={lead.phone.clone()} oninput={on_phone} placeholder="(123) 456-7890" />
                </div>
                <div>
                    <label for="company">{"Company"}</label>
                    <input id="company" type="text" class={input_class(LeadField::Company)}
                        value={lead.company.clone()} oninput={on_company} placeholder="Acme Inc." />
                    { error_for(LeadField::Company) }
                </div>
            </div>
            <div>
                <label for="website">{"Website"}</label>
                <input id="website" type="url" class="field"
                    value={lead.website.clone()} oninput={on_website} placeholder="https://acme.com" />
            </div>
            <div>
                <label>{"Services"}</label>
                <div class="services">
                    { for SERVICE_OPTIONS.iter().map(|service| html! {
                        <label>
                            <input type="checkbox"
                                checked={lead.services.iter().any(|s| s == *service)}
                                onchange={on_service(*service)} />
                            {" "}{*service}
                        </label>
                    }) }
                </div>
                { error_for(LeadField::Services) }
            </div>
            <div class="row">
                <div>
                    <label for="budget">{"Budget"}</label>
                    <select id="budget" class="field" onchange={on_budget}>
                        { for BUDGET_OPTIONS.iter().map(|option| html! {
                            <option value={*option} selected={lead.budget == *option}>{*option}</option>
                        }) }
                    </select>
                </div>
                <div>
                    <label for="revenue">{"Annual Revenue"}</label>
                    <select id="revenue" class="field" onchange={on_revenue}>
                        { for REVENUE_OPTIONS.iter().map(|option| html! {
                            <option value={*option} selected={lead.revenue == *option}>{*option}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div>
                <label for="timeline">{"Timeline"}</label>
                <select id="timeline" class="field" onchange={on_timeline}>
                    { for TIMELINE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={lead.timeline == *option}>{*option}</option>
                    }) }
                </select>
            </div>
            <div>
                <label for="description">{"Project Description"}</label>
                <textarea id="description" class="field" rows="3"
                    value={lead.description.clone()} oninput={on_description}
                    placeholder="Tell us what you want to build" />
            </div>
            <button type="submit" disabled={sending}>
                { if sending { "Sending..." } else { "Get Started" } }
            </button>
            if *submit_state == SubmitState::Failed {
                <p class="submit-error">{"Something went wrong sending your details. Please try again later."}</p>
            }
            <p class="fine-print">
                {"By submitting, you agree to our Privacy Policy and Terms of Service."}
            </p>
        </form>
    }
}
