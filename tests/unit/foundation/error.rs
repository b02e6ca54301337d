use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixelsetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixelsetError::transform("x")
            .to_string()
            .contains("transform error:")
    );
    assert!(
        PixelsetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixelsetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
