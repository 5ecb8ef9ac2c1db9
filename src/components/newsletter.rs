use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::hero::SUCCESS_MESSAGE_MS;
use crate::lead::is_valid_email;
use crate::motion::{AnimationSpec, Motion, MotionTag, TransitionSpec, ViewportTrigger};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

pub fn check_subscription(email: &str) -> Result<(), &'static str> {
    if email.is_empty() || !is_valid_email(email) {
        Err(INVALID_EMAIL)
    } else {
        Ok(())
    }
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let submitted = use_state(|| false);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| move || drop(reset_timer.borrow_mut().take()),
            (),
        );
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(message) = check_subscription(&email) {
                error.set(Some(message));
                return;
            }
            error.set(None);
            info!("Newsletter subscription for {}", *email);
            email.set(String::new());
            submitted.set(true);

            let submitted = submitted.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(SUCCESS_MESSAGE_MS, move || {
                submitted.set(false);
            }));
        })
    };

    html! {
        <section class="newsletter">
            <style>
                {r#"
                .newsletter {
                    padding: 4rem 1rem;
                    background: linear-gradient(90deg, #2563eb, #14b8a6);
                    color: #fff;
                }
                .newsletter-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .newsletter h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .newsletter .lede { color: rgba(255, 255, 255, 0.8); margin-bottom: 2rem; }
                .newsletter form {
                    display: flex;
                    gap: 0.75rem;
                    max-width: 32rem;
                    margin: 0 auto;
                }
                .newsletter .email-field { flex-grow: 1; text-align: left; }
                .newsletter input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    box-sizing: border-box;
                }
                .newsletter input.invalid { border-color: #fca5a5; }
                .newsletter .error { margin-top: 0.5rem; color: #fecaca; font-size: 0.875rem; }
                .newsletter button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: #fff;
                    color: #2563eb;
                    font-weight: 500;
                    cursor: pointer;
                }
                .newsletter .thanks {
                    margin-top: 1rem;
                    padding: 0.5rem;
                    border-radius: 4px;
                    background: rgba(255, 255, 255, 0.1);
                }
                .newsletter .privacy { margin-top: 1rem; font-size: 0.75rem; color: rgba(255, 255, 255, 0.7); }
                @media (max-width: 640px) {
                    .newsletter form { flex-direction: column; }
                }
                "#}
            </style>
            <Motion
                class="newsletter-inner"
                initial={AnimationSpec::new().opacity(0.0).y(20.0)}
                while_in_view={AnimationSpec::new().opacity(1.0).y(0.0)}
                transition={TransitionSpec::duration(0.5)}
                viewport={ViewportTrigger::once()}
            >
                <h2>{"Stay Updated with Innovation"}</h2>
                <p class="lede">
                    {"Subscribe to our newsletter to receive the latest insights, trends, and innovations in technology."}
                </p>
                <form {onsubmit} novalidate={true}>
                    <div class="email-field">
                        <input
                            type="email"
                            class={classes!(error.is_some().then(|| "invalid"))}
                            value={(*email).clone()}
                            {oninput}
                            placeholder="Enter your email"
                        />
                        if let Some(message) = *error {
                            <p class="error">{message}</p>
                        }
                    </div>
                    <button type="submit">{"Subscribe ➤"}</button>
                </form>
                if *submitted {
                    <Motion
                        tag={MotionTag::P}
                        class="thanks"
                        initial={AnimationSpec::new().opacity(0.0)}
                        animate={AnimationSpec::new().opacity(1.0)}
                    >
                        {"Thank you for subscribing! We'll keep you updated."}
                    </Motion>
                }
                <p class="privacy">{"We respect your privacy. Unsubscribe at any time."}</p>
            </Motion>
        </section>
    }
}
