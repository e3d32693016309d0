use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{DrawtirError, DrawtirResult};
use crate::foundation::time::try_parse_time_string;
use crate::scene::model::{Element, ExtraFields, Frame};
use crate::timeline::duration::TimingOpts;
use crate::timeline::timings::calculate_frame_timings_with;

/// A saved design: the ordered frame sequence plus any document-level editor fields.
///
/// Accepts either `{ "frames": [...] }` or a bare frame array on input; always writes the
/// object form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Project {
    /// Frames in playback order.
    pub frames: Vec<Frame>,
    /// Document fields the timeline ignores.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl<'de> Deserialize<'de> for Project {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ProjectVisitor)
    }
}

#[derive(Deserialize)]
struct ProjectDoc {
    frames: Vec<Frame>,
    #[serde(flatten)]
    extra: ExtraFields,
}

/// Dispatches on the top-level JSON kind so field errors reach the caller intact.
struct ProjectVisitor;

impl<'de> Visitor<'de> for ProjectVisitor {
    type Value = Project;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a project object with `frames` or an array of frames")
    }

    fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let frames = Vec::<Frame>::deserialize(SeqAccessDeserializer::new(seq))?;
        Ok(Project::new(frames))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let doc = ProjectDoc::deserialize(MapAccessDeserializer::new(map))?;
        Ok(Project {
            frames: doc.frames,
            extra: doc.extra,
        })
    }
}

impl Project {
    /// Wrap a frame sequence.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            extra: ExtraFields::new(),
        }
    }

    /// Parse a project from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DrawtirResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DrawtirError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project from a JSON string.
    pub fn from_json_str(s: &str) -> DrawtirResult<Self> {
        serde_json::from_str(s).map_err(|e| DrawtirError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DrawtirResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open project JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DrawtirResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DrawtirError::serde(format!("write project JSON: {e}")))
    }

    /// Copy of this project with freshly computed frame timings.
    pub fn with_timings(&self, opts: &TimingOpts) -> Self {
        Self {
            frames: calculate_frame_timings_with(&self.frames, opts),
            extra: self.extra.clone(),
        }
    }

    /// Check the data the timeline depends on.
    ///
    /// The timeline functions accept anything; this is for callers that want malformed input
    /// rejected up front instead of surfacing as `NaN` timings.
    pub fn validate(&self) -> DrawtirResult<()> {
        let mut seen = BTreeSet::new();
        for frame in &self.frames {
            if frame.id.trim().is_empty() {
                return Err(DrawtirError::validation("frame id must be non-empty"));
            }
            if !seen.insert(frame.id.as_str()) {
                return Err(DrawtirError::validation(format!(
                    "duplicate frame id '{}'",
                    frame.id
                )));
            }
            if let Some(d) = frame.duration {
                check_seconds(&frame.id, "duration", d)?;
            }
            if let Some(t) = frame.transition_duration {
                check_seconds(&frame.id, "transitionDuration", t)?;
            }
            for (i, element) in frame.elements.iter().enumerate() {
                validate_element(element).map_err(|e| {
                    DrawtirError::validation(format!("frame '{}' element {i}: {e}", frame.id))
                })?;
            }
        }
        Ok(())
    }
}

fn check_seconds(frame_id: &str, field: &str, v: f64) -> DrawtirResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(DrawtirError::validation(format!(
            "frame '{frame_id}' {field} must be finite and >= 0, got {v}"
        )));
    }
    Ok(())
}

fn validate_element(element: &Element) -> DrawtirResult<()> {
    if let Some(s) = &element.animation_delay {
        try_parse_time_string(s)?;
    }
    if let Some(s) = &element.animation_duration {
        try_parse_time_string(s)?;
    }
    for spec in &element.animations {
        try_parse_time_string(&spec.delay)?;
        try_parse_time_string(&spec.duration)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/project.rs"]
mod tests;
