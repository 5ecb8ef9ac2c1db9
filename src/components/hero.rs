use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::motion::{AnimationSpec, Motion, TransitionSpec};

/// How long the thank-you card replaces the form.
pub const SUCCESS_MESSAGE_MS: u32 = 5_000;

#[function_component(Hero)]
pub fn hero() -> Html {
    let show_success = use_state(|| false);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| move || drop(reset_timer.borrow_mut().take()),
            (),
        );
    }

    let on_submit_success = {
        let show_success = show_success.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |_: ()| {
            show_success.set(true);
            let show_success = show_success.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(SUCCESS_MESSAGE_MS, move || {
                show_success.set(false);
            }));
        })
    };

    html! {
        <section class="hero" id="about">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: #000;
                }
                .hero .glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    pointer-events: none;
                }
                .hero .glow.one { top: -10rem; right: -10rem; width: 24rem; height: 24rem; background: rgba(234, 88, 12, 0.2); }
                .hero .glow.two { top: 50%; left: 25%; width: 20rem; height: 20rem; background: rgba(249, 115, 22, 0.1); }
                .hero-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 6rem 1rem 4rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .hero-copy {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .hero-copy h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero-copy h1 span {
                    background: linear-gradient(90deg, #fb923c, #ea580c);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-copy p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-actions a {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                }
                .hero-actions .primary { background: #f97316; }
                .hero-actions .secondary { border: 1px solid rgba(249, 115, 22, 0.3); }
                .form-card {
                    width: 100%;
                    max-width: 42rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    backdrop-filter: blur(24px);
                    box-sizing: border-box;
                }
                .form-card h2 {
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .form-success {
                    padding: 1rem;
                    border-radius: 8px;
                    background: rgba(34, 197, 94, 0.2);
                    border: 1px solid rgba(34, 197, 94, 0.3);
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .hero-copy h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
            <div class="glow one"></div>
            <div class="glow two"></div>
            <div class="hero-inner">
                <Motion
                    class="hero-copy"
                    initial={AnimationSpec::new().opacity(0.0).y(20.0)}
                    animate={AnimationSpec::new().opacity(1.0).y(0.0)}
                    transition={TransitionSpec::duration(0.8)}
                >
                    <h1>
                        {"Transform Your Ideas Into "}
                        <span>{"Market-Leading Products"}</span>
                    </h1>
                    <p>
                        {"We help innovative companies turn their boldest visions into reality with cutting-edge technology and strategic expertise."}
                    </p>
                    <div class="hero-actions">
                        <a href="#services" class="primary">{"Our Services"}</a>
                        <a href="#testimonials" class="secondary">{"Learn More"}</a>
                    </div>
                </Motion>
                <Motion
                    class="form-card"
                    initial={AnimationSpec::new().opacity(0.0).scale(0.95)}
                    animate={AnimationSpec::new().opacity(1.0).scale(1.0)}
                    transition={TransitionSpec::duration(0.8).delayed(0.2)}
                >
                    <h2>{"Get Started Today"}</h2>
                    if *show_success {
                        <div class="form-success">
                            <p>{"Thank you for submitting your form! We've received your information and will be in touch with next steps."}</p>
                        </div>
                    } else {
                        <LeadForm {on_submit_success} />
                    }
                </Motion>
            </div>
        </section>
    }
}
