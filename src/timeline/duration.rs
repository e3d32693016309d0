use crate::foundation::math::nan_max;
use crate::foundation::time::parse_time_string;
use crate::scene::model::{Element, Frame, TimelineMode};

/// Default lower bound for an auto-mode frame, in seconds.
pub const DEFAULT_MIN_FRAME_DURATION: f64 = 3.0;
/// Seconds appended after the last animation ends so it is seen to finish.
pub const FRAME_END_BUFFER: f64 = 0.5;

/// Knobs for auto-mode duration computation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingOpts {
    /// Auto frames never end before this many seconds (before the end buffer).
    pub min_duration_secs: f64,
    /// Trailing buffer added to every auto frame.
    pub end_buffer_secs: f64,
}

impl Default for TimingOpts {
    fn default() -> Self {
        Self {
            min_duration_secs: DEFAULT_MIN_FRAME_DURATION,
            end_buffer_secs: FRAME_END_BUFFER,
        }
    }
}

impl TimingOpts {
    /// Default options with a different minimum duration.
    pub fn with_min_duration(min_duration_secs: f64) -> Self {
        Self {
            min_duration_secs,
            ..Self::default()
        }
    }
}

/// End time of the element's primary animation, `0` when it has none.
pub fn get_animation_end_time(element: &Element) -> f64 {
    if element.primary_animation().is_none() {
        return 0.0;
    }
    parse_time_string(element.animation_delay_or_default())
        + parse_time_string(element.animation_duration_or_default())
}

/// Latest end time over the primary and all secondary animations, `0` when there are none.
pub fn get_element_max_animation_time(element: &Element) -> f64 {
    element
        .animations
        .iter()
        .map(|spec| spec.end_time())
        .fold(get_animation_end_time(element), nan_max)
}

/// Effective duration of a frame with the default 3 s minimum and 0.5 s end buffer.
///
/// Use [`calculate_frame_duration_with`] and [`TimingOpts::with_min_duration`] for a
/// custom minimum.
pub fn calculate_frame_duration(frame: &Frame) -> f64 {
    calculate_frame_duration_with(frame, &TimingOpts::default())
}

/// Effective duration of a frame.
///
/// A manual frame with a set, non-zero duration keeps it. Anything else gets
/// `max(min, latest animation end) + buffer`.
pub fn calculate_frame_duration_with(frame: &Frame, opts: &TimingOpts) -> f64 {
    if frame.mode() == TimelineMode::Manual
        && let Some(d) = frame.duration
        && d != 0.0
        && !d.is_nan()
    {
        return d;
    }

    let latest = frame
        .elements
        .iter()
        .map(get_element_max_animation_time)
        .fold(opts.min_duration_secs, nan_max);
    latest + opts.end_buffer_secs
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/duration.rs"]
mod tests;
