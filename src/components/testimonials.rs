use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::motion::{AnimationSpec, Motion, TransitionSpec, ViewportTrigger};

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Innovate X Labs transformed our concept into a market-leading product in record time. Their technical expertise and strategic approach are unmatched.",
        author: "Sarah Johnson",
        role: "CTO",
        company: "TechVision Inc.",
    },
    Testimonial {
        quote: "Working with the team at Innovate X Labs was a game-changer for our startup. They helped us refine our product and scale quickly in a competitive market.",
        author: "Michael Chen",
        role: "Founder",
        company: "NexGen Solutions",
    },
    Testimonial {
        quote: "The insights and innovation that Innovate X Labs brought to our project exceeded our expectations. They're true partners in our success story.",
        author: "Emily Rodriguez",
        role: "VP of Product",
        company: "Frontier Tech",
    },
    Testimonial {
        quote: "From concept to launch, Innovate X Labs delivered excellence at every stage. Their ability to solve complex technical challenges while keeping sight of our business goals was impressive.",
        author: "David Park",
        role: "CEO",
        company: "Elevate Digital",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Target `scrollLeft` after paging one visible width in `direction`.
pub fn page_offset(scroll_left: f64, client_width: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Left => scroll_left - client_width,
        Direction::Right => scroll_left + client_width,
    }
}

fn page(slider: &Element, direction: Direction) {
    let target = page_offset(
        f64::from(slider.scroll_left()),
        f64::from(slider.client_width()),
        direction,
    );
    let mut options = ScrollToOptions::new();
    options.left(target);
    options.behavior(ScrollBehavior::Smooth);
    slider.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let slider = use_node_ref();

    let scroll = |direction: Direction| {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = slider.cast::<Element>() {
                page(&element, direction);
            }
        })
    };

    html! {
        <section id="testimonials" class="testimonials">
            <style>
                {r#"
                .testimonials {
                    position: relative;
                    padding: 5rem 1rem;
                    background: #0f172a;
                    color: #fff;
                    overflow: hidden;
                }
                .testimonials .section-label { color: #60a5fa; }
                .testimonials .section-header p { color: #d1d5db; }
                .carousel {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .slider {
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                    padding-bottom: 2rem;
                }
                .slider::-webkit-scrollbar { display: none; }
                .testimonial-card {
                    min-width: 500px;
                    flex-shrink: 0;
                    scroll-snap-align: center;
                    padding: 2rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .testimonial-card blockquote {
                    margin: 0 0 1.5rem;
                    color: #e5e7eb;
                    line-height: 1.6;
                }
                .testimonial-card h4 { margin: 0; }
                .testimonial-card .role { color: #9ca3af; }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    cursor: pointer;
                }
                .carousel-arrow.left { left: 0; }
                .carousel-arrow.right { right: 0; }
                @media (max-width: 768px) {
                    .testimonial-card { min-width: 300px; }
                }
                "#}
            </style>
            <SectionHeader
                label="TESTIMONIALS"
                title="What Our Clients Say"
                blurb="We've helped companies across industries turn their ideas into successful products."
            />
            <div class="carousel">
                <div class="slider" ref={slider.clone()}>
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Motion
                            key={testimonial.author}
                            class="testimonial-card"
                            initial={AnimationSpec::new().opacity(0.0).scale(0.95)}
                            while_in_view={AnimationSpec::new().opacity(1.0).scale(1.0)}
                            transition={TransitionSpec::duration(0.5).delayed(index as f64 / 10.0)}
                            viewport={ViewportTrigger::once().with_margin("-100px")}
                        >
                            <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                            <h4>{testimonial.author}</h4>
                            <span class="role">{format!("{}, {}", testimonial.role, testimonial.company)}</span>
                        </Motion>
                    }) }
                </div>
                <button class="carousel-arrow left" onclick={scroll(Direction::Left)} aria-label="Previous testimonial">
                    {"‹"}
                </button>
                <button class="carousel-arrow right" onclick={scroll(Direction::Right)} aria-label="Next testimonial">
                    {"›"}
                </button>
            </div>
        </section>
    }
}
