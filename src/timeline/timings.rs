use crate::scene::model::{Frame, FrameTimingUpdate};
use crate::timeline::duration::{TimingOpts, calculate_frame_duration_with};

/// Recompute start time and duration for every frame with default options.
///
/// See [`calculate_frame_timings_with`].
pub fn calculate_frame_timings(frames: &[Frame]) -> Vec<Frame> {
    calculate_frame_timings_with(frames, &TimingOpts::default())
}

/// Recompute start time and duration for every frame.
///
/// Frames are laid end to end in input order, each followed by its transition gap. The first
/// frame starts at `0`. An unset timeline mode is normalized to auto. Editing any frame can
/// move every later one, so callers rerun this over the whole sequence after each edit.
#[tracing::instrument(level = "debug", skip_all, fields(frames = frames.len()))]
pub fn calculate_frame_timings_with(frames: &[Frame], opts: &TimingOpts) -> Vec<Frame> {
    let mut current_time = 0.0;
    frames
        .iter()
        .map(|frame| {
            let duration = calculate_frame_duration_with(frame, opts);
            if !duration.is_finite() {
                tracing::debug!(frame_id = %frame.id, duration, "frame duration is not finite");
            }

            let timed = Frame {
                start_time: current_time,
                duration: Some(duration),
                timeline_mode: Some(frame.mode()),
                ..frame.clone()
            };
            current_time += duration + frame.transition_secs();
            timed
        })
        .collect()
}

/// Position of the frame with `frame_id`, or `-1` when absent.
pub fn get_frame_index(frames: &[Frame], frame_id: &str) -> isize {
    find_frame_index(frames, frame_id)
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(-1)
}

/// Position of the frame with `frame_id`.
pub fn find_frame_index(frames: &[Frame], frame_id: &str) -> Option<usize> {
    frames.iter().position(|f| f.id == frame_id)
}

/// Patch one frame's timing fields and recompute the whole sequence.
///
/// An unknown `frame_id` returns an unchanged copy of `frames` without recomputing.
pub fn update_frame_timing(
    frames: &[Frame],
    frame_id: &str,
    updates: &FrameTimingUpdate,
) -> Vec<Frame> {
    update_frame_timing_with(frames, frame_id, updates, &TimingOpts::default())
}

/// [`update_frame_timing`] with explicit options for the recompute.
#[tracing::instrument(level = "debug", skip(frames, updates, opts), fields(frames = frames.len()))]
pub fn update_frame_timing_with(
    frames: &[Frame],
    frame_id: &str,
    updates: &FrameTimingUpdate,
    opts: &TimingOpts,
) -> Vec<Frame> {
    let Some(index) = find_frame_index(frames, frame_id) else {
        tracing::debug!("no frame with this id; timing update ignored");
        return frames.to_vec();
    };

    let mut patched = frames.to_vec();
    updates.apply_to(&mut patched[index]);
    calculate_frame_timings_with(&patched, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timings.rs"]
mod tests;
