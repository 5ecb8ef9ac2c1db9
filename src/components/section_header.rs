use yew::prelude::*;

use crate::motion::{AnimationSpec, Motion, MotionTag, TransitionSpec, ViewportTrigger};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub label: AttrValue,
    pub title: AttrValue,
    pub blurb: AttrValue,
}

/// Label, title and blurb fading in one after another.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let rise = || AnimationSpec::new().opacity(0.0).y(20.0);
    let settle = || AnimationSpec::new().opacity(1.0).y(0.0);

    html! {
        <div class="section-header">
            <Motion
                tag={MotionTag::Span}
                class="section-label"
                initial={AnimationSpec::new().opacity(0.0)}
                while_in_view={AnimationSpec::new().opacity(1.0)}
                viewport={ViewportTrigger::once()}
            >
                { props.label.clone() }
            </Motion>
            <Motion
                tag={MotionTag::H2}
                initial={rise()}
                while_in_view={settle()}
                transition={TransitionSpec::duration(0.5).delayed(0.1)}
            >
                { props.title.clone() }
            </Motion>
            <Motion
                tag={MotionTag::P}
                initial={rise()}
                while_in_view={settle()}
                transition={TransitionSpec::duration(0.5).delayed(0.2)}
            >
                { props.blurb.clone() }
            </Motion>
        </div>
    }
}
