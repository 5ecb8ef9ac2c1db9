use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The only attributes the animated container knows how to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualProperty {
    Opacity,
    X,
    Y,
    Scale,
}

impl VisualProperty {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "opacity" => Some(Self::Opacity),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }
}

/// One `property: value` pair of an animation spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Directive {
    pub property: VisualProperty,
    pub value: f64,
}

/// Ordered set of visual targets, used both as the starting point and as the
/// end point of an animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationSpec {
    directives: Vec<Directive>,
}

impl AnimationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(VisualProperty::Opacity, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.with(VisualProperty::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.with(VisualProperty::Y, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(VisualProperty::Scale, value)
    }

    pub fn with(mut self, property: VisualProperty, value: f64) -> Self {
        self.directives.push(Directive { property, value });
        self
    }

    /// Builds a spec from loose key/value entries. Keys outside the supported
    /// set are skipped.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |spec, (key, value)| match VisualProperty::from_key(key) {
                Some(property) => spec.with(property, value),
                None => {
                    debug!("Ignoring unsupported animation key {:?}", key);
                    spec
                }
            })
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

impl<'de> Deserialize<'de> for AnimationSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let numeric: Vec<(&str, f64)> = entries
            .iter()
            .filter_map(|(key, value)| match value.as_f64() {
                Some(number) => Some((key.as_str(), number)),
                None => {
                    debug!("Ignoring non-numeric animation value for {:?}", key);
                    None
                }
            })
            .collect();
        Ok(Self::from_entries(numeric))
    }
}

pub const DEFAULT_DURATION: f64 = 0.5;

/// Timing of the interpolation between initial and final state, in seconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransitionSpec {
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub delay: Option<f64>,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: Some(DEFAULT_DURATION),
            delay: None,
        }
    }
}

impl TransitionSpec {
    pub fn duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            delay: None,
        }
    }

    pub fn delayed(self, delay: f64) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    /// CSS `transition` value for this spec.
    pub fn descriptor(&self) -> String {
        let duration = self.duration.unwrap_or(DEFAULT_DURATION);
        match self.delay {
            Some(delay) => format!("all {}s ease {}s", duration, delay),
            None => format!("all {}s", duration),
        }
    }
}

/// When the visibility-driven animation fires.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ViewportTrigger {
    #[serde(default = "default_once")]
    pub once: bool,
    #[serde(default = "default_margin")]
    pub margin: String,
}

fn default_once() -> bool {
    true
}

fn default_margin() -> String {
    "0px".to_string()
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self {
            once: default_once(),
            margin: default_margin(),
        }
    }
}

impl ViewportTrigger {
    pub fn once() -> Self {
        Self::default()
    }

    pub fn repeating() -> Self {
        Self {
            once: false,
            ..Self::default()
        }
    }

    pub fn with_margin(self, margin: impl Into<String>) -> Self {
        Self {
            margin: margin.into(),
            ..self
        }
    }
}
