use log::warn;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::driver::{self, MotionConfig};
use super::spec::{AnimationSpec, TransitionSpec, ViewportTrigger};
use super::state::StyleSink;
use super::watch::IntersectionSource;

/// Element kinds a `Motion` can render as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionTag {
    #[default]
    Div,
    Span,
    P,
    H1,
    H2,
    H3,
    Section,
    Article,
    Li,
}

impl MotionTag {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionTag::Div => "div",
            MotionTag::Span => "span",
            MotionTag::P => "p",
            MotionTag::H1 => "h1",
            MotionTag::H2 => "h2",
            MotionTag::H3 => "h3",
            MotionTag::Section => "section",
            MotionTag::Article => "article",
            MotionTag::Li => "li",
        }
    }
}

/// Writes straight into an element's inline style.
pub struct ElementStyle {
    element: HtmlElement,
}

impl ElementStyle {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl StyleSink for ElementStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(name, value) {
            warn!("Failed to set {} to {}: {:?}", name, value, e);
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MotionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tag: MotionTag,
    #[prop_or_default]
    pub initial: Option<AnimationSpec>,
    #[prop_or_default]
    pub animate: Option<AnimationSpec>,
    #[prop_or_default]
    pub while_in_view: Option<AnimationSpec>,
    #[prop_or_default]
    pub transition: TransitionSpec,
    #[prop_or_default]
    pub viewport: ViewportTrigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

impl MotionProps {
    pub fn config(&self) -> MotionConfig {
        MotionConfig {
            initial: self.initial.clone(),
            animate: self.animate.clone(),
            while_in_view: self.while_in_view.clone(),
            transition: self.transition.clone(),
            viewport: self.viewport.clone(),
        }
    }
}

/// Wraps its children in `tag` and animates it from `initial` to either
/// `animate` (right after mount) or `while_in_view` (once the element scrolls
/// into view).
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let config = props.config();

    // The first paint already carries the initial state.
    let initial_style = config.initial_state().inline_style();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let handle = node.cast::<HtmlElement>().map(|element| {
                    let target: Element = element.clone().into();
                    driver::mount(
                        &config,
                        ElementStyle::new(element),
                        &IntersectionSource,
                        &target,
                    )
                });
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <@{props.tag.as_str()}
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={initial_style}
        >
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_render_as_html_names() {
        assert_eq!(MotionTag::default().as_str(), "div");
        assert_eq!(MotionTag::H2.as_str(), "h2");
        assert_eq!(MotionTag::Span.as_str(), "span");
    }

    #[test]
    fn props_map_onto_config() {
        let props = yew::props!(MotionProps {
            initial: Some(AnimationSpec::new().opacity(0.0)),
            while_in_view: Some(AnimationSpec::new().opacity(1.0)),
        });
        let config = props.config();
        assert_eq!(config.transition, TransitionSpec::default());
        assert_eq!(config.viewport, ViewportTrigger::default());
        assert_eq!(config.initial_state().inline_style(), "opacity: 0;");
    }
}
