use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::spec::{AnimationSpec, TransitionSpec, ViewportTrigger};
use super::state::{Phase, StyleSink, VisualState};
use super::watch::{Disposition, ObserveOptions, Subscription, VisibilitySource};

/// Everything a motion needs to know about its two states and how to move
/// between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionConfig {
    pub initial: Option<AnimationSpec>,
    pub animate: Option<AnimationSpec>,
    pub while_in_view: Option<AnimationSpec>,
    pub transition: TransitionSpec,
    pub viewport: ViewportTrigger,
}

/// How the final state gets applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger<'a> {
    OnVisible(&'a AnimationSpec),
    Immediate(&'a AnimationSpec),
    Never,
}

impl MotionConfig {
    pub fn trigger(&self) -> Trigger<'_> {
        match (&self.while_in_view, &self.animate) {
            (Some(spec), _) => Trigger::OnVisible(spec),
            (None, Some(spec)) => Trigger::Immediate(spec),
            (None, None) => Trigger::Never,
        }
    }

    pub fn initial_state(&self) -> VisualState {
        VisualState::initial(self.initial.as_ref())
    }
}

struct Reveal<S> {
    sink: S,
    state: VisualState,
    target: AnimationSpec,
    once: bool,
    applied: usize,
}

impl<S: StyleSink> Reveal<S> {
    fn apply_final(&mut self) {
        self.state.apply(&self.target, Phase::Final);
        self.state.write_to(&mut self.sink);
        self.applied += 1;
    }

    fn on_visibility(&mut self, visible: bool) -> Disposition {
        if self.once && self.applied > 0 {
            return Disposition::Disconnect;
        }
        if !visible {
            return Disposition::Keep;
        }
        self.apply_final();
        if self.once {
            Disposition::Disconnect
        } else {
            Disposition::Keep
        }
    }
}

/// Keeps a mounted motion's visibility subscription alive. Dropping it is the
/// teardown.
pub struct MotionHandle {
    subscription: Option<Subscription>,
}

impl MotionHandle {
    pub fn is_watching(&self) -> bool {
        self.subscription
            .as_ref()
            .map_or(false, Subscription::is_active)
    }

    pub fn teardown(mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

/// Applies the initial state and transition to `sink`, then either applies
/// the final state right away or waits for `target` to become visible.
pub fn mount<S, V>(
    config: &MotionConfig,
    mut sink: S,
    source: &V,
    target: &V::Target,
) -> MotionHandle
where
    S: StyleSink + 'static,
    V: VisibilitySource,
{
    let state = config.initial_state();
    state.write_to(&mut sink);
    sink.set_property("transition", &config.transition.descriptor());

    let (spec, on_visible) = match config.trigger() {
        Trigger::OnVisible(spec) => (spec, true),
        Trigger::Immediate(spec) => (spec, false),
        Trigger::Never => return MotionHandle { subscription: None },
    };

    let reveal = Rc::new(RefCell::new(Reveal {
        sink,
        state,
        target: spec.clone(),
        once: config.viewport.once,
        applied: 0,
    }));

    if !on_visible {
        reveal.borrow_mut().apply_final();
        return MotionHandle { subscription: None };
    }

    let options = ObserveOptions::with_margin(config.viewport.margin.clone());
    let watcher = reveal.clone();
    let callback = Box::new(move |visible: bool| watcher.borrow_mut().on_visibility(visible));

    match source.watch(target, &options, callback) {
        Ok(subscription) => {
            debug!("Watching visibility with margin {}", options.margin);
            MotionHandle {
                subscription: Some(subscription),
            }
        }
        Err(err) => {
            warn!("{}; showing final state without waiting", err);
            reveal.borrow_mut().apply_final();
            MotionHandle { subscription: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::state::tests::RecordingSink;
    use crate::motion::watch::tests::FakeViewport;
    use pretty_assertions::assert_eq;

    fn fade_up() -> MotionConfig {
        MotionConfig {
            initial: Some(AnimationSpec::new().opacity(0.0).y(20.0)),
            while_in_view: Some(AnimationSpec::new().opacity(1.0).y(0.0)),
            transition: TransitionSpec::duration(0.8),
            ..MotionConfig::default()
        }
    }

    #[test]
    fn fade_up_waits_for_visibility() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let handle = mount(&fade_up(), sink.clone(), &viewport, &());

        assert_eq!(sink.get("opacity").as_deref(), Some("0"));
        assert_eq!(sink.get("transform").as_deref(), Some("translateY(20px)"));
        assert!(sink.get("transition").unwrap().contains("all 0.8s"));
        assert!(handle.is_watching());

        viewport.emit(true);

        assert_eq!(sink.get("opacity").as_deref(), Some("1"));
        assert_eq!(sink.get("transform").as_deref(), Some("translateY(0px)"));
    }

    #[test]
    fn transition_is_attached_before_final_values() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let _handle = mount(&fade_up(), sink.clone(), &viewport, &());
        viewport.emit(true);

        let writes = sink.writes.borrow();
        let transition_at = writes.iter().position(|(name, _)| name == "transition").unwrap();
        let final_at = writes
            .iter()
            .position(|(name, value)| name == "opacity" && value == "1")
            .unwrap();
        assert!(transition_at < final_at);
    }

    #[test]
    fn observer_uses_trigger_margin_and_threshold() {
        let viewport = FakeViewport::default();
        let config = MotionConfig {
            viewport: ViewportTrigger::once().with_margin("-100px"),
            ..fade_up()
        };
        let _handle = mount(&config, RecordingSink::default(), &viewport, &());

        let options = viewport.last_options.borrow().clone().unwrap();
        assert_eq!(options, ObserveOptions::with_margin("-100px"));
    }

    #[test]
    fn leaving_view_before_entering_changes_nothing() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let _handle = mount(&fade_up(), sink.clone(), &viewport, &());

        viewport.emit(false);

        assert_eq!(sink.get("opacity").as_deref(), Some("0"));
        assert_eq!(viewport.active(), 1);
    }

    #[test]
    fn once_applies_final_state_at_most_once() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let handle = mount(&fade_up(), sink.clone(), &viewport, &());

        for _ in 0..3 {
            viewport.emit(true);
            viewport.emit(false);
        }

        assert_eq!(sink.count("opacity", "1"), 1);
        assert_eq!(viewport.active(), 0);
        assert!(!handle.is_watching());
    }

    #[test]
    fn fired_once_motion_is_not_released_again_on_teardown() {
        let viewport = FakeViewport::default();
        let handle = mount(&fade_up(), RecordingSink::default(), &viewport, &());

        viewport.emit(true);
        handle.teardown();

        assert_eq!(*viewport.releases.borrow(), 0);
        assert_eq!(viewport.active(), 0);
    }

    #[test]
    fn unfired_motion_is_released_once_on_teardown() {
        let viewport = FakeViewport::default();
        let handle = mount(&fade_up(), RecordingSink::default(), &viewport, &());

        handle.teardown();

        assert_eq!(*viewport.releases.borrow(), 1);
    }

    #[test]
    fn repeating_trigger_reapplies_on_reentry() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let config = MotionConfig {
            viewport: ViewportTrigger::repeating(),
            ..fade_up()
        };
        let handle = mount(&config, sink.clone(), &viewport, &());

        viewport.emit(true);
        viewport.emit(false);
        viewport.emit(true);

        assert_eq!(sink.count("opacity", "1"), 2);
        assert!(handle.is_watching());
        assert_eq!(viewport.active(), 1);
    }

    #[test]
    fn teardown_before_visibility_leaves_no_observer() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let handle = mount(&fade_up(), sink.clone(), &viewport, &());
        assert_eq!(viewport.active(), 1);

        handle.teardown();
        viewport.emit(true);

        assert_eq!(viewport.active(), 0);
        assert_eq!(sink.get("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn dropping_handle_is_teardown() {
        let viewport = FakeViewport::default();
        let handle = mount(&fade_up(), RecordingSink::default(), &viewport, &());
        drop(handle);
        assert_eq!(viewport.active(), 0);
    }

    #[test]
    fn immediate_animation_skips_observation() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let config = MotionConfig {
            initial: Some(AnimationSpec::new().opacity(0.0).scale(0.95)),
            animate: Some(AnimationSpec::new().opacity(1.0).scale(1.0)),
            transition: TransitionSpec::duration(0.8).delayed(0.2),
            ..MotionConfig::default()
        };
        let handle = mount(&config, sink.clone(), &viewport, &());

        assert_eq!(viewport.subscriptions(), 0);
        assert!(!handle.is_watching());
        assert_eq!(sink.get("opacity").as_deref(), Some("1"));
        let transform = sink.get("transform").unwrap();
        assert!(transform.contains("scale(1)"));
        assert!(!transform.contains("scale(0.95)"));
    }

    #[test]
    fn visibility_spec_takes_precedence_over_immediate() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let config = MotionConfig {
            animate: Some(AnimationSpec::new().opacity(0.5)),
            ..fade_up()
        };
        let _handle = mount(&config, sink.clone(), &viewport, &());

        assert_eq!(viewport.subscriptions(), 1);
        assert_eq!(sink.count("opacity", "0.5"), 0);

        viewport.emit(true);
        assert_eq!(sink.get("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn no_final_spec_only_sets_initial_state() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::default();
        let config = MotionConfig {
            initial: Some(AnimationSpec::new().opacity(0.3)),
            ..MotionConfig::default()
        };
        let handle = mount(&config, sink.clone(), &viewport, &());

        assert!(!handle.is_watching());
        assert_eq!(viewport.subscriptions(), 0);
        assert_eq!(sink.get("opacity").as_deref(), Some("0.3"));
        assert_eq!(sink.get("transition").as_deref(), Some("all 0.5s"));
    }

    #[test]
    fn unavailable_observer_shows_final_state() {
        let sink = RecordingSink::default();
        let viewport = FakeViewport::failing();
        let handle = mount(&fade_up(), sink.clone(), &viewport, &());

        assert!(!handle.is_watching());
        assert_eq!(sink.get("opacity").as_deref(), Some("1"));
    }
}
