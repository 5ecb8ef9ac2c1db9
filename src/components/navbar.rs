use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

const SCROLLED_OFFSET: f64 = 10.0;

const SECTIONS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#services", "Services"),
    ("#testimonials", "Testimonials"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            let offset = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(offset > SCROLLED_OFFSET);
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 1rem;
                    background: transparent;
                    transition: all 0.3s;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 1rem;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    position: relative;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #fb923c, #ea580c);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .burger-menu {
                    display: none;
                    position: absolute;
                    left: 0;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                }
                .mobile-menu {
                    position: absolute;
                    width: 100%;
                    left: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem;
                    background: #000;
                }
                .mobile-menu a {
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                }
                .mobile-menu a:hover {
                    color: #fb923c;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <span class="nav-logo">{"Innovate X Labs"}</span>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            }
        </nav>
    }
}
