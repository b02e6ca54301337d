use super::*;

#[test]
fn srcset_joins_url_and_width() {
    let bps = vec![
        ResolvedBreakpoint {
            url: "/a-100.jpg".to_string(),
            width: 100,
        },
        ResolvedBreakpoint {
            url: "/a-200.jpg".to_string(),
            width: 200,
        },
    ];
    assert_eq!(
        srcset_string(&bps).as_deref(),
        Some("/a-100.jpg 100w, /a-200.jpg 200w")
    );
}

#[test]
fn empty_srcset_is_none() {
    assert_eq!(srcset_string(&[]), None);
}

#[test]
fn scaled_height_follows_requested_ratio() {
    assert_eq!(scaled_height(800, Some(400), Some(300)), Some(600));
    assert_eq!(scaled_height(640, Some(1920), Some(1080)), Some(360));
    assert_eq!(scaled_height(640, Some(1920), None), None);
    assert_eq!(scaled_height(640, None, Some(1080)), None);
}
