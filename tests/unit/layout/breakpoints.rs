use super::*;

#[test]
fn fixed_is_one_and_two_x() {
    assert_eq!(
        resolve_breakpoints(Some(300), None, LayoutMode::Fixed),
        vec![300, 600]
    );
    assert_eq!(
        resolve_breakpoints(Some(300), Some(&[100, 5000]), LayoutMode::Fixed),
        vec![300, 600]
    );
    assert!(resolve_breakpoints(None, None, LayoutMode::Fixed).is_empty());
}

#[test]
fn constrained_keeps_candidates_below_double_width() {
    let out = resolve_breakpoints(Some(800), None, LayoutMode::Constrained);
    assert!(out.contains(&800));
    assert!(out.contains(&1600));
    assert!(out.iter().all(|&w| w <= 1600));
    assert_eq!(
        out,
        vec![640, 750, 800, 828, 960, 1080, 1280, 1600]
    );
}

#[test]
fn constrained_with_explicit_candidates() {
    let out = resolve_breakpoints(Some(800), Some(&[400, 1600, 2000, 800]), LayoutMode::Constrained);
    assert_eq!(out, vec![400, 800, 1600]);
    assert!(resolve_breakpoints(None, Some(&[400]), LayoutMode::Constrained).is_empty());
}

#[test]
fn fluid_layouts_dedupe_and_sort_candidates() {
    for layout in [
        LayoutMode::FullWidth,
        LayoutMode::Cover,
        LayoutMode::Responsive,
        LayoutMode::Contained,
    ] {
        assert_eq!(
            resolve_breakpoints(Some(50), Some(&[200, 100, 200, 300]), layout),
            vec![100, 200, 300]
        );
    }
}

#[test]
fn fluid_layouts_default_to_device_table() {
    assert_eq!(
        resolve_breakpoints(None, None, LayoutMode::FullWidth),
        DEFAULT_DEVICE_WIDTHS.to_vec()
    );
}

#[test]
fn finalize_drops_zero_widths() {
    assert_eq!(finalize_breakpoints([0, 3, 1, 3]), vec![1, 3]);
}
