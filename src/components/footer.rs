use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::CONTACT_EMAIL;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("#about", "About Us"),
    ("#services", "Services"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                .site-footer {
                    padding: 4rem 1rem 2rem;
                    background: #0f172a;
                    color: #fff;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto 3rem;
                }
                .footer-brand {
                    font-size: 1.25rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #60a5fa, #2dd4bf);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .site-footer h3 { font-size: 1.125rem; margin-bottom: 1rem; }
                .site-footer ul { list-style: none; padding: 0; margin: 0; }
                .site-footer li { margin-bottom: 0.5rem; color: #9ca3af; }
                .site-footer a { color: #9ca3af; text-decoration: none; }
                .site-footer a:hover { color: #60a5fa; }
                .footer-bottom {
                    border-top: 1px solid #1e293b;
                    padding-top: 2rem;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <p class="footer-brand">{"Innovate X Labs"}</p>
                    <p style="color: #9ca3af;">
                        {"Transforming ideas into market-leading products through innovation and technology."}
                    </p>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href}>{*label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact Info"}</h3>
                    <ul>
                        <li>{"123 Innovation Way, San Francisco, CA 94103"}</li>
                        <li><a href="tel:+1234567890">{"(123) 456-7890"}</a></li>
                        <li><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Working Hours"}</h3>
                    <ul>
                        <li>{"Monday - Friday: 9:00 AM - 6:00 PM"}</li>
                        <li>{"Saturday: 10:00 AM - 2:00 PM"}</li>
                        <li>{"Sunday: Closed"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} Innovate X Labs. All rights reserved.", year)}
            </div>
        </footer>
    }
}
