use super::spec::{AnimationSpec, VisualProperty};

/// Where the style writes of a motion end up. The browser implementation
/// writes to an element's inline style.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Which side of the animation a spec is applied as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Final,
}

/// Presentation of a single element. Offsets are pixels, scale and opacity are
/// unitless.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState {
    opacity: Option<f64>,
    x: Option<f64>,
    y: Option<f64>,
    scale: Option<f64>,
}

impl VisualState {
    pub fn initial(spec: Option<&AnimationSpec>) -> Self {
        let mut state = Self::default();
        if let Some(spec) = spec {
            state.apply(spec, Phase::Initial);
        }
        state
    }

    /// Initial scale directives multiply into the current factor; a final
    /// scale retargets it.
    pub fn apply(&mut self, spec: &AnimationSpec, phase: Phase) {
        for directive in spec.directives() {
            let value = directive.value;
            match directive.property {
                VisualProperty::Opacity => self.opacity = Some(value),
                VisualProperty::X => self.x = Some(value),
                VisualProperty::Y => self.y = Some(value),
                VisualProperty::Scale => {
                    self.scale = match phase {
                        Phase::Initial => Some(self.scale.unwrap_or(1.0) * value),
                        Phase::Final => Some(value),
                    }
                }
            }
        }
    }

    pub fn scale_factor(&self) -> Option<f64> {
        self.scale
    }

    pub fn opacity(&self) -> Option<String> {
        self.opacity.map(|opacity| opacity.to_string())
    }

    pub fn transform(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.x.map(|x| format!("translateX({}px)", x)),
            self.y.map(|y| format!("translateY({}px)", y)),
            self.scale.map(|scale| format!("scale({})", scale)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Inline `style` attribute for the first render.
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if let Some(opacity) = self.opacity() {
            style.push_str(&format!("opacity: {};", opacity));
        }
        if let Some(transform) = self.transform() {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("transform: {};", transform));
        }
        style
    }

    pub fn write_to<S: StyleSink + ?Sized>(&self, sink: &mut S) {
        if let Some(opacity) = self.opacity() {
            sink.set_property("opacity", &opacity);
        }
        if let Some(transform) = self.transform() {
            sink.set_property("transform", &transform);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// Sink that records every write and keeps the latest value per property.
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        pub writes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl RecordingSink {
        pub fn current(&self) -> BTreeMap<String, String> {
            self.writes.borrow().iter().cloned().collect()
        }

        pub fn get(&self, name: &str) -> Option<String> {
            self.current().get(name).cloned()
        }

        pub fn count(&self, name: &str, value: &str) -> usize {
            self.writes
                .borrow()
                .iter()
                .filter(|(n, v)| n == name && v == value)
                .count()
        }
    }

    impl StyleSink for RecordingSink {
        fn set_property(&mut self, name: &str, value: &str) {
            self.writes
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn every_supported_property_is_written() {
        let spec = AnimationSpec::new().opacity(0.0).x(-30.0).y(20.0).scale(0.9);
        let mut sink = RecordingSink::default();
        VisualState::initial(Some(&spec)).write_to(&mut sink);

        assert_eq!(sink.get("opacity").as_deref(), Some("0"));
        assert_eq!(
            sink.get("transform").as_deref(),
            Some("translateX(-30px) translateY(20px) scale(0.9)")
        );
    }

    #[test]
    fn offsets_do_not_clobber_each_other() {
        let mut state = VisualState::initial(Some(&AnimationSpec::new().y(20.0).x(5.0)));
        state.apply(&AnimationSpec::new().y(0.0), Phase::Final);
        assert_eq!(
            state.transform().as_deref(),
            Some("translateX(5px) translateY(0px)")
        );
    }

    #[test]
    fn initial_scales_compose_multiplicatively() {
        let spec = AnimationSpec::new().scale(0.5).scale(0.8).scale(0.5);
        let state = VisualState::initial(Some(&spec));
        assert_eq!(state.scale_factor(), Some(0.2));
        assert_eq!(state.transform().as_deref(), Some("scale(0.2)"));
    }

    #[test]
    fn final_scale_replaces_initial_fragment() {
        let mut state = VisualState::initial(Some(&AnimationSpec::new().opacity(0.0).scale(0.95)));
        state.apply(&AnimationSpec::new().opacity(1.0).scale(1.0), Phase::Final);

        let transform = state.transform().unwrap();
        assert!(transform.contains("scale(1)"));
        assert!(!transform.contains("scale(0.95)"));
    }

    #[test]
    fn empty_state_writes_nothing() {
        let mut sink = RecordingSink::default();
        let state = VisualState::initial(None);
        state.write_to(&mut sink);
        assert!(sink.writes.borrow().is_empty());
        assert_eq!(state.inline_style(), "");
    }

    #[test]
    fn inline_style_matches_initial_state() {
        let state = VisualState::initial(Some(&AnimationSpec::new().opacity(0.0).y(20.0)));
        assert_eq!(
            state.inline_style(),
            "opacity: 0; transform: translateY(20px);"
        );
    }
}
