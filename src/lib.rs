//! Drawtir's frame/element timeline engine.
//!
//! A presentation is an ordered list of [`Frame`]s. Each frame owns [`Element`]s whose
//! enter/exit animations decide how long the frame lasts (unless the user pinned a manual
//! duration). This crate turns that authored structure into a time-positioned timeline and
//! answers playhead queries against it.
//!
//! # Model
//!
//! 1. **Durations**: [`calculate_frame_duration`] gives a frame's length: its manual value, or
//!    `max(minimum, latest animation end) + 0.5s` in auto mode.
//! 2. **Timings**: [`calculate_frame_timings`] lays frames end to end, each followed by its
//!    transition gap, and writes `start_time`/`duration` into fresh copies.
//! 3. **Lookup**: [`get_frame_at_time`], [`global_to_frame_time`] and friends map a playhead
//!    time to a frame using half-open `[start, start + duration)` spans.
//!
//! Design constraints:
//!
//! - **Pure**: no IO, clocks or hidden state in the engine. Inputs are borrowed, outputs are new
//!   values; callers replace the sequence they hold.
//! - **Total**: engine functions never fail. Unknown ids are no-ops, malformed duration strings
//!   become `NaN`. Use [`try_parse_time_string`] or [`Project::validate`] to reject bad data at
//!   the boundary.
//! - **Whole-sequence recompute**: every edit reruns timings for all frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod scene;
mod timeline;

pub use foundation::error::{DrawtirError, DrawtirResult};
pub use foundation::time::{
    TimeUnit, format_time_string, parse_time_string, parse_time_string_or_zero,
    try_parse_time_string,
};
pub use scene::model::{
    AnimationKind, AnimationSpec, DEFAULT_ANIMATION_DELAY, DEFAULT_ANIMATION_DURATION, Element,
    ExtraFields, Frame, FrameTimingUpdate, TimelineMode,
};
pub use scene::project::Project;
pub use timeline::duration::{
    DEFAULT_MIN_FRAME_DURATION, FRAME_END_BUFFER, TimingOpts, calculate_frame_duration,
    calculate_frame_duration_with, get_animation_end_time, get_element_max_animation_time,
};
pub use timeline::lookup::{
    AnimationClamp, PlaybackPosition, clamp_animation_to_frame, frame_to_global_time,
    get_frame_at_time, get_total_duration, global_to_frame_time, locate,
};
pub use timeline::timings::{
    calculate_frame_timings, calculate_frame_timings_with, find_frame_index, get_frame_index,
    update_frame_timing, update_frame_timing_with,
};
