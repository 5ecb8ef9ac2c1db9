use yew::prelude::*;

use crate::components::{
    footer::Footer, hero::Hero, navbar::Navbar, newsletter::Newsletter, services::Services,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <style>
                {r#"
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    background: #000;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .site {
                    min-height: 100vh;
                    color: #fff;
                    background: #000;
                }
                "#}
            </style>
            <Navbar />
            <Hero />
            <Services />
            <Testimonials />
            <Newsletter />
            <Footer />
        </div>
    }
}
