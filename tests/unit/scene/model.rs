use super::*;

#[test]
fn frame_json_uses_editor_field_names() {
    let json = r#"{
        "id": "f1",
        "name": "Intro",
        "timelineMode": "manual",
        "duration": 7,
        "startTime": 2,
        "transitionDuration": 0.5,
        "elements": [{
            "id": "e1",
            "type": "text",
            "animation": "slide-in-left",
            "animationDelay": "1s",
            "animationDuration": "500ms",
            "animations": [{ "type": "pulse", "delay": "2s", "duration": "1s", "easing": "ease-in" }]
        }]
    }"#;
    let frame: Frame = serde_json::from_str(json).unwrap();
    assert_eq!(frame.id, "f1");
    assert_eq!(frame.mode(), TimelineMode::Manual);
    assert_eq!(frame.duration, Some(7.0));
    assert_eq!(frame.start_time, 2.0);
    assert_eq!(frame.transition_secs(), 0.5);
    assert_eq!(frame.extra["name"], "Intro");

    let el = &frame.elements[0];
    assert_eq!(el.primary_animation(), Some(&AnimationKind::SlideInLeft));
    assert_eq!(el.animation_duration.as_deref(), Some("500ms"));
    assert_eq!(el.extra["type"], "text");
    assert_eq!(el.animations[0].kind, Some(AnimationKind::Pulse));
    assert_eq!(el.animations[0].extra["easing"], "ease-in");
}

#[test]
fn unknown_fields_survive_a_round_trip() {
    let json = r##"{"id":"f","elements":[{"x":10,"y":20,"content":"hi"}],"background":"#fff"}"##;
    let frame: Frame = serde_json::from_str(json).unwrap();
    let back = serde_json::to_value(&frame).unwrap();
    assert_eq!(back["background"], "#fff");
    assert_eq!(back["elements"][0]["x"], 10);
    assert_eq!(back["elements"][0]["content"], "hi");
    assert!(back.get("timelineMode").is_none());
    assert!(back["elements"][0].get("animations").is_none());
}

#[test]
fn missing_fields_take_defaults() {
    let frame: Frame = serde_json::from_str(r#"{"id":"f"}"#).unwrap();
    assert!(frame.elements.is_empty());
    assert_eq!(frame.timeline_mode, None);
    assert_eq!(frame.mode(), TimelineMode::Auto);
    assert_eq!(frame.duration_secs(), 0.0);
    assert_eq!(frame.start_time, 0.0);
    assert_eq!(frame.transition_secs(), 0.0);

    let spec: AnimationSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec.delay, DEFAULT_ANIMATION_DELAY);
    assert_eq!(spec.duration, DEFAULT_ANIMATION_DURATION);
}

#[test]
fn none_animation_is_not_primary() {
    let el: Element = serde_json::from_str(r#"{"animation":"none"}"#).unwrap();
    assert_eq!(el.animation, Some(AnimationKind::None));
    assert_eq!(el.primary_animation(), None);
}

#[test]
fn unknown_animation_names_pass_through() {
    let json = r#"{
        "animation": "wiggle",
        "animationDelay": "1s",
        "animationDuration": "2s",
        "animations": [{ "type": "shake", "delay": "0s", "duration": "1s" }]
    }"#;
    let el: Element = serde_json::from_str(json).unwrap();
    assert_eq!(
        el.primary_animation(),
        Some(&AnimationKind::Other("wiggle".to_owned()))
    );
    assert_eq!(
        el.animations[0].kind,
        Some(AnimationKind::Other("shake".to_owned()))
    );

    let back = serde_json::to_value(&el).unwrap();
    assert_eq!(back["animation"], "wiggle");
    assert_eq!(back["animations"][0]["type"], "shake");
}

#[test]
fn known_names_do_not_fall_into_other() {
    let kind: AnimationKind = serde_json::from_str(r#""slide-in-down""#).unwrap();
    assert_eq!(kind, AnimationKind::SlideInDown);
    let none: AnimationKind = serde_json::from_str(r#""none""#).unwrap();
    assert!(!none.is_some());
}

#[test]
fn builders_set_fields() {
    let frame = Frame::new("a")
        .with_element(Element::new().with_animation(AnimationKind::FadeIn, "1s", "2s"))
        .manual(4.0)
        .with_transition(1.0);
    assert_eq!(frame.mode(), TimelineMode::Manual);
    assert_eq!(frame.duration, Some(4.0));
    assert_eq!(frame.transition_duration, Some(1.0));
    assert_eq!(frame.elements[0].animation_delay_or_default(), "1s");
}

#[test]
fn animation_spec_end_time_sums_delay_and_duration() {
    let spec = AnimationSpec::new(AnimationKind::Bounce, "250ms", "1.5s");
    assert_eq!(spec.end_time(), 1.75);
}

#[test]
fn timing_update_only_touches_given_fields() {
    let mut frame = Frame::new("a").with_transition(2.0);
    FrameTimingUpdate {
        timeline_mode: Some(TimelineMode::Manual),
        duration: Some(9.0),
        ..Default::default()
    }
    .apply_to(&mut frame);
    assert_eq!(frame.mode(), TimelineMode::Manual);
    assert_eq!(frame.duration, Some(9.0));
    assert_eq!(frame.transition_duration, Some(2.0));
}
