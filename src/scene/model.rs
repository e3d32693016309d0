use serde::{Deserialize, Serialize};

use crate::foundation::time::parse_time_string;

/// Delay assumed for a primary animation that does not set `animationDelay`.
pub const DEFAULT_ANIMATION_DELAY: &str = "0s";
/// Duration assumed for an animation that does not set its duration.
pub const DEFAULT_ANIMATION_DURATION: &str = "0.5s";

/// Passthrough storage for editor fields the timeline does not interpret.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Named enter/exit transition an element can play.
///
/// Names the editor adds later land in [`AnimationKind::Other`] and are written back as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// No animation; contributes nothing to frame timing.
    #[default]
    None,
    /// Opacity 0 to 1.
    FadeIn,
    /// Opacity 1 to 0.
    FadeOut,
    /// Slide in from the left edge.
    SlideInLeft,
    /// Slide in from the right edge.
    SlideInRight,
    /// Slide in from below.
    SlideInUp,
    /// Slide in from above.
    SlideInDown,
    /// Scale up into place.
    ZoomIn,
    /// Scale down out of place.
    ZoomOut,
    /// Repeating opacity pulse.
    Pulse,
    /// Vertical bounce.
    Bounce,
    /// Full rotation.
    Spin,
    /// Expanding ring.
    Ping,
    /// Any other animation name.
    #[serde(untagged)]
    Other(String),
}

impl AnimationKind {
    /// Return `true` for every kind except [`AnimationKind::None`].
    pub fn is_some(&self) -> bool {
        *self != Self::None
    }
}

/// One entry of an element's secondary animation list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Which transition plays. Timing does not depend on it.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnimationKind>,
    /// Start offset from frame start, as a duration string.
    #[serde(default = "default_delay")]
    pub delay: String,
    /// Run length, as a duration string.
    #[serde(default = "default_duration")]
    pub duration: String,
    /// Editor fields the timeline ignores (easing, iteration count, ...).
    #[serde(flatten)]
    pub extra: ExtraFields,
}

fn default_delay() -> String {
    DEFAULT_ANIMATION_DELAY.to_owned()
}

fn default_duration() -> String {
    DEFAULT_ANIMATION_DURATION.to_owned()
}

impl AnimationSpec {
    /// Build a secondary animation from delay/duration strings.
    pub fn new(kind: AnimationKind, delay: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            delay: delay.into(),
            duration: duration.into(),
            extra: ExtraFields::new(),
        }
    }

    /// `delay + duration` in seconds.
    pub fn end_time(&self) -> f64 {
        parse_time_string(&self.delay) + parse_time_string(&self.duration)
    }
}

/// A visual element owned by a frame. Only timeline-relevant fields are typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Primary animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationKind>,
    /// Primary animation delay string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_delay: Option<String>,
    /// Primary animation duration string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<String>,
    /// Secondary animations; only the latest end time matters for timing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<AnimationSpec>,
    /// Editor fields the timeline ignores (position, size, content, ...).
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Element {
    /// An element with no animations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary animation and its timing.
    pub fn with_animation(
        mut self,
        kind: AnimationKind,
        delay: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        self.animation = Some(kind);
        self.animation_delay = Some(delay.into());
        self.animation_duration = Some(duration.into());
        self
    }

    /// Append a secondary animation.
    pub fn push_animation(mut self, spec: AnimationSpec) -> Self {
        self.animations.push(spec);
        self
    }

    /// The primary animation, if one is set and is not `none`.
    pub fn primary_animation(&self) -> Option<&AnimationKind> {
        self.animation.as_ref().filter(|k| k.is_some())
    }

    /// Primary delay string, falling back to [`DEFAULT_ANIMATION_DELAY`].
    pub fn animation_delay_or_default(&self) -> &str {
        self.animation_delay
            .as_deref()
            .unwrap_or(DEFAULT_ANIMATION_DELAY)
    }

    /// Primary duration string, falling back to [`DEFAULT_ANIMATION_DURATION`].
    pub fn animation_duration_or_default(&self) -> &str {
        self.animation_duration
            .as_deref()
            .unwrap_or(DEFAULT_ANIMATION_DURATION)
    }
}

/// How a frame's duration is determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineMode {
    /// Derived from element animations.
    #[default]
    Auto,
    /// Set by the user; never overwritten.
    Manual,
}

/// One slide/scene of a presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Stable unique identifier.
    pub id: String,
    /// Elements owned by this frame.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Duration policy; absent means [`TimelineMode::Auto`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_mode: Option<TimelineMode>,
    /// Seconds. Authoritative only in manual mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Absolute offset in seconds. Written by the timeline engine only.
    #[serde(default)]
    pub start_time: f64,
    /// Gap in seconds after this frame before the next one starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
    /// Editor fields the timeline ignores (name, size, background, ...).
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Frame {
    /// An empty auto-mode frame.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
            timeline_mode: None,
            duration: None,
            start_time: 0.0,
            transition_duration: None,
            extra: ExtraFields::new(),
        }
    }

    /// Append an element.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Switch to manual mode with a fixed duration.
    pub fn manual(mut self, duration: f64) -> Self {
        self.timeline_mode = Some(TimelineMode::Manual);
        self.duration = Some(duration);
        self
    }

    /// Set the gap after this frame.
    pub fn with_transition(mut self, seconds: f64) -> Self {
        self.transition_duration = Some(seconds);
        self
    }

    /// Effective mode (`auto` when unset).
    pub fn mode(&self) -> TimelineMode {
        self.timeline_mode.unwrap_or_default()
    }

    /// Duration in seconds, `0` when never computed.
    pub fn duration_secs(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    /// Transition gap in seconds, `0` when unset.
    pub fn transition_secs(&self) -> f64 {
        self.transition_duration.unwrap_or(0.0)
    }

    /// Exclusive end of the frame's active span.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration_secs()
    }
}

/// Partial patch accepted by [`crate::update_frame_timing`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTimingUpdate {
    /// New duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// New duration policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_mode: Option<TimelineMode>,
    /// New transition gap in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
}

impl FrameTimingUpdate {
    pub(crate) fn apply_to(&self, frame: &mut Frame) {
        if let Some(duration) = self.duration {
            frame.duration = Some(duration);
        }
        if let Some(mode) = self.timeline_mode {
            frame.timeline_mode = Some(mode);
        }
        if let Some(transition) = self.transition_duration {
            frame.transition_duration = Some(transition);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
