use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::{AnimationSpec, Motion, TransitionSpec};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #000; color: #fff;">
            <Motion
                initial={AnimationSpec::new().opacity(0.0).scale(0.9)}
                animate={AnimationSpec::new().opacity(1.0).scale(1.0)}
                transition={TransitionSpec::duration(0.6)}
            >
                <div style="text-align: center;">
                    <h1 style="font-size: 4rem; margin-bottom: 1rem;">{"404"}</h1>
                    <p style="color: #9ca3af; margin-bottom: 2rem;">{"This page drifted out of view."}</p>
                    <Link<Route> to={Route::Home} classes="back-home">
                        <span style="color: #fb923c;">{"Back to the homepage"}</span>
                    </Link<Route>>
                </div>
            </Motion>
        </div>
    }
}
