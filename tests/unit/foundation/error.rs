use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DrawtirError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DrawtirError::parse("x").to_string().contains("parse error:"));
    assert!(
        DrawtirError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DrawtirError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
