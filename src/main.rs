use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod lead;

/// Scroll-triggered entrance animations. A `Motion` paints its element in the
/// `initial` state and moves it to `animate` or `while_in_view` with a CSS
/// transition; visibility is watched through `watch::VisibilitySource`.
mod motion {
    pub mod component;
    pub mod driver;
    pub mod spec;
    pub mod state;
    pub mod watch;

    pub use component::{Motion, MotionTag};
    pub use spec::{AnimationSpec, TransitionSpec, ViewportTrigger};
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod lead_form;
    pub mod navbar;
    pub mod newsletter;
    pub mod section_header;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
