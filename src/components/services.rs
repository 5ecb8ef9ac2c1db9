use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::motion::{AnimationSpec, Motion, TransitionSpec, ViewportTrigger};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "💡",
        title: "Product Innovation",
        description: "Transforming your ideas into market-ready products with cutting-edge technology and human-centered design.",
    },
    Service {
        icon: "</>",
        title: "Custom Development",
        description: "Building tailored software solutions that solve complex problems and drive business growth.",
    },
    Service {
        icon: "📊",
        title: "Data Analytics",
        description: "Unlocking insights from your data to make informed decisions and identify new opportunities.",
    },
    Service {
        icon: "🚀",
        title: "Go-to-Market Strategy",
        description: "Creating comprehensive strategies to successfully launch your product into the market.",
    },
];

/// Cards come in a tenth of a second apart.
pub fn card_delay(index: usize) -> f64 {
    (index + 1) as f64 / 10.0
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <style>
                {r#"
                .services {
                    padding: 5rem 1rem;
                    background: #f9fafb;
                    color: #111827;
                }
                .section-header {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 4rem;
                }
                .section-label {
                    display: inline-block;
                    color: #ea580c;
                    font-weight: 500;
                }
                .section-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0.5rem 0 1rem;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .service-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .service-icon {
                    display: inline-block;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 8px;
                    background: #fff7ed;
                    font-size: 1.5rem;
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }
                .service-card p {
                    color: #4b5563;
                }
                @media (max-width: 1024px) {
                    .service-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .service-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <SectionHeader
                label="OUR SERVICES"
                title="How We Help You Innovate"
                blurb="We combine deep technical expertise with strategic thinking to help you build the next generation of innovative products."
            />
            <div class="service-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <Motion
                        key={service.title}
                        class="service-card"
                        initial={AnimationSpec::new().opacity(0.0).y(20.0)}
                        while_in_view={AnimationSpec::new().opacity(1.0).y(0.0)}
                        transition={TransitionSpec::duration(0.5).delayed(card_delay(index))}
                        viewport={ViewportTrigger::once().with_margin("-100px")}
                    >
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </Motion>
                }) }
            </div>
        </section>
    }
}
