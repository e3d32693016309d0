use crate::scene::model::Frame;

/// Frame active at `global_time`.
///
/// Each frame owns the half-open span `[start, start + duration)`. A time that falls in no
/// span (a transition gap, or past the end) resolves to the last frame. Empty input gives
/// `None`.
pub fn get_frame_at_time(frames: &[Frame], global_time: f64) -> Option<&Frame> {
    frame_index_at_time(frames, global_time).map(|i| &frames[i])
}

fn frame_index_at_time(frames: &[Frame], global_time: f64) -> Option<usize> {
    frames
        .iter()
        .position(|f| f.start_time <= global_time && global_time < f.end_time())
        .or_else(|| frames.len().checked_sub(1))
}

/// Convert a global time into the frame's local time, floored at `0`.
pub fn global_to_frame_time(frame: &Frame, global_time: f64) -> f64 {
    (global_time - frame.start_time).max(0.0)
}

/// Convert a frame-local time into global time. Not clamped.
pub fn frame_to_global_time(frame: &Frame, frame_time: f64) -> f64 {
    frame.start_time + frame_time
}

/// End of the last frame's active span; its trailing transition is not counted.
pub fn get_total_duration(frames: &[Frame]) -> f64 {
    frames.last().map_or(0.0, Frame::end_time)
}

/// Result of [`clamp_animation_to_frame`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationClamp {
    /// Suggested delay in seconds.
    pub delay: f64,
    /// Suggested duration in seconds.
    pub duration: f64,
    /// `true` when the proposed values already fit the frame.
    pub is_valid: bool,
}

/// Check a proposed animation `(delay, duration)` against the frame's duration.
///
/// Only the bound that was crossed is corrected: a negative delay is raised to `0` with the
/// duration left as given; an overrun keeps the delay and shortens the duration to fit. A
/// frame without a duration imposes no upper bound. Nothing is mutated; callers decide
/// whether to apply the suggestion.
pub fn clamp_animation_to_frame(frame: &Frame, delay: f64, duration: f64) -> AnimationClamp {
    if delay < 0.0 {
        return AnimationClamp {
            delay: 0.0,
            duration,
            is_valid: false,
        };
    }

    if let Some(limit) = frame.duration
        && delay + duration > limit
    {
        return AnimationClamp {
            delay,
            duration: (limit - delay).max(0.0),
            is_valid: false,
        };
    }

    AnimationClamp {
        delay,
        duration,
        is_valid: true,
    }
}

/// Where a playhead at some global time sits.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackPosition {
    /// Index of the active frame.
    pub index: usize,
    /// Id of the active frame.
    pub frame_id: String,
    /// Seconds since the active frame started.
    pub local_time: f64,
}

/// Resolve a playhead time to its frame and frame-local time in one step.
pub fn locate(frames: &[Frame], global_time: f64) -> Option<PlaybackPosition> {
    let index = frame_index_at_time(frames, global_time)?;
    let frame = &frames[index];
    Some(PlaybackPosition {
        index,
        frame_id: frame.id.clone(),
        local_time: global_to_frame_time(frame, global_time),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/lookup.rs"]
mod tests;
