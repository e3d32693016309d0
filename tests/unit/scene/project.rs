use super::*;
use crate::scene::model::{AnimationKind, AnimationSpec, TimelineMode};

const DOC: &str = r#"{
    "title": "Launch deck",
    "frames": [
        { "id": "a", "elements": [{ "animation": "fade-in", "animationDelay": "1s", "animationDuration": "3s" }] },
        { "id": "b", "timelineMode": "manual", "duration": 2, "transitionDuration": 1 }
    ]
}"#;

#[test]
fn parses_document_and_bare_array() {
    let doc = Project::from_json_str(DOC).unwrap();
    assert_eq!(doc.frames.len(), 2);
    assert_eq!(doc.extra["title"], "Launch deck");

    let bare = Project::from_json_str(r#"[{ "id": "x" }, { "id": "y" }]"#).unwrap();
    assert_eq!(bare.frames.len(), 2);
    assert!(bare.extra.is_empty());
}

#[test]
fn reader_and_str_agree() {
    let a = Project::from_json_str(DOC).unwrap();
    let b = Project::from_reader(DOC.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_non_project_json() {
    let err = Project::from_json_str(r#"{ "pages": [] }"#).unwrap_err();
    assert!(matches!(err, DrawtirError::Serde(_)));
    assert!(Project::from_json_str("42").is_err());
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = Project::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, DrawtirError::Other(_)));
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn load_errors_name_the_offending_field() {
    let missing_id = Project::from_json_str(r#"[{ "elements": [] }]"#).unwrap_err();
    assert!(missing_id.to_string().contains("missing field `id`"), "{missing_id}");

    let bad_duration =
        Project::from_json_str(r#"{ "frames": [{ "id": "a", "duration": "long" }] }"#).unwrap_err();
    let msg = bad_duration.to_string();
    assert!(msg.contains("\"long\""), "{msg}");
    assert!(msg.contains("line 1"), "{msg}");

    let no_frames = Project::from_json_str(r#"{ "pages": [] }"#).unwrap_err();
    assert!(no_frames.to_string().contains("missing field `frames`"), "{no_frames}");
}

#[test]
fn unknown_animation_names_do_not_block_loading() {
    let doc = Project::from_json_str(
        r#"[{ "id": "a", "elements": [{
            "animation": "wiggle", "animationDelay": "1s", "animationDuration": "4s",
            "animations": [{ "type": "shake", "delay": "0s", "duration": "1s" }]
        }] }]"#,
    )
    .unwrap();
    doc.validate().unwrap();
    let timed = doc.with_timings(&TimingOpts::default());
    assert_eq!(timed.frames[0].duration, Some(5.5));
}

#[test]
fn with_timings_keeps_document_fields() {
    let doc = Project::from_json_str(DOC).unwrap();
    let timed = doc.with_timings(&TimingOpts::default());
    assert_eq!(timed.extra, doc.extra);
    assert_eq!(timed.frames[0].duration, Some(4.5));
    assert_eq!(timed.frames[1].start_time, 4.5);
    assert_eq!(timed.frames[1].duration, Some(2.0));
    assert_eq!(timed.frames[0].timeline_mode, Some(TimelineMode::Auto));
}

#[test]
fn pretty_json_round_trips() {
    let doc = Project::from_json_str(DOC)
        .unwrap()
        .with_timings(&TimingOpts::default());
    let text = doc.to_json_pretty().unwrap();
    assert!(text.contains("\"startTime\""));
    assert!(text.contains("\"title\""));
    assert_eq!(Project::from_json_str(&text).unwrap(), doc);
}

#[test]
fn validate_accepts_well_formed_project() {
    Project::from_json_str(DOC).unwrap().validate().unwrap();
    Project::default().validate().unwrap();
}

#[test]
fn validate_rejects_duplicate_and_empty_ids() {
    let dup = Project::new(vec![Frame::new("a"), Frame::new("a")]);
    assert!(dup.validate().unwrap_err().to_string().contains("duplicate"));

    let empty = Project::new(vec![Frame::new("  ")]);
    assert!(empty.validate().is_err());
}

#[test]
fn validate_rejects_malformed_durations() {
    let bad_primary = Project::new(vec![Frame::new("a").with_element(
        Element::new().with_animation(AnimationKind::FadeIn, "soon", "1s"),
    )]);
    let err = bad_primary.validate().unwrap_err();
    assert!(matches!(err, DrawtirError::Validation(_)));
    assert!(err.to_string().contains("frame 'a' element 0"));

    let bad_secondary = Project::new(vec![Frame::new("a").with_element(
        Element::new().push_animation(AnimationSpec::new(AnimationKind::Spin, "1s", "-2s")),
    )]);
    assert!(bad_secondary.validate().is_err());

    let bad_manual = Project::new(vec![Frame::new("a").manual(f64::NAN)]);
    assert!(bad_manual.validate().is_err());

    let bad_gap = Project::new(vec![Frame::new("a").with_transition(-1.0)]);
    assert!(bad_gap.validate().is_err());
}
