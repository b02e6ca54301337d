use super::*;

fn params(layout: LayoutMode) -> StyleParams<'static> {
    StyleParams {
        width: Some(400),
        height: Some(200),
        aspect_ratio: Some(2.0),
        layout: Some(layout),
        ..Default::default()
    }
}

#[test]
fn style_map_overwrites_in_place() {
    let mut m = StyleMap::new();
    m.set("a", "1");
    m.set("b", "2");
    m.set("a", "3");
    assert_eq!(m.len(), 2);
    assert_eq!(m.get("a"), Some("3"));
    assert_eq!(m.to_css(), "a: 3; b: 2;");
}

#[test]
fn set_opt_skips_unknown_values() {
    let mut m = StyleMap::new();
    m.set_opt::<String>("width", None);
    assert!(m.is_empty());
    assert_eq!(m.to_css(), "");
}

#[test]
fn base_declarations_without_layout() {
    let s = generate_style(&StyleParams::default());
    assert_eq!(s, "object-fit: cover; object-position: center;");
}

#[test]
fn fixed_layout() {
    assert_eq!(
        generate_style(&params(LayoutMode::Fixed)),
        "object-fit: cover; object-position: top left; width: 400px; height: 200px;"
    );
}

#[test]
fn constrained_layout() {
    assert_eq!(
        generate_style(&params(LayoutMode::Constrained)),
        "object-fit: cover; object-position: center; max-width: 400px; max-height: 200px; aspect-ratio: 2; width: 100%;"
    );
}

#[test]
fn full_width_layout() {
    assert_eq!(
        generate_style(&params(LayoutMode::FullWidth)),
        "object-fit: cover; object-position: center; width: 100%; aspect-ratio: 2; height: 200px;"
    );
}

#[test]
fn responsive_layout() {
    assert_eq!(
        generate_style(&params(LayoutMode::Responsive)),
        "object-fit: cover; object-position: center; width: 100%; height: auto; aspect-ratio: 2;"
    );
}

#[test]
fn contained_layout_overrides_object_fit_in_place() {
    assert_eq!(
        generate_style(&params(LayoutMode::Contained)),
        "object-fit: contain; object-position: center; max-width: 100%; max-height: 100%; aspect-ratio: 2;"
    );
}

#[test]
fn cover_layout() {
    assert_eq!(
        generate_style(&params(LayoutMode::Cover)),
        "object-fit: cover; object-position: center; max-width: 100%; max-height: 100%;"
    );
}

#[test]
fn unknown_dimensions_are_omitted() {
    let s = generate_style(&StyleParams {
        layout: Some(LayoutMode::FullWidth),
        ..Default::default()
    });
    assert_eq!(s, "object-fit: cover; object-position: center; width: 100%;");
}

#[test]
fn url_background_expands_to_image_declarations() {
    let s = generate_style(&StyleParams {
        background: Some("data:image/png;base64,AAAA"),
        ..Default::default()
    });
    assert!(s.contains("background-image: url(data:image/png;base64,AAAA);"));
    assert!(s.contains("background-size: cover;"));
    assert!(s.contains("background-repeat: no-repeat;"));
    assert!(!s.contains("background: "));
}

#[test]
fn plain_background_is_a_single_declaration() {
    let s = generate_style(&StyleParams {
        background: Some("#eee"),
        object_fit: Some("fill"),
        object_position: Some("bottom"),
        ..Default::default()
    });
    assert_eq!(
        s,
        "object-fit: fill; object-position: bottom; background: #eee;"
    );
}

#[test]
fn fractional_ratio_keeps_full_precision() {
    let s = generate_style(&StyleParams {
        aspect_ratio: Some(16.0 / 9.0),
        layout: Some(LayoutMode::Responsive),
        ..Default::default()
    });
    assert!(s.contains("aspect-ratio: 1.7777777777777777;"));
}
