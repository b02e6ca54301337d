use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pixelset_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &Path, w: u32, h: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 40, 90, 255]));
    img.save(path).unwrap();
}

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .build()
        .unwrap()
}

#[test]
fn normalize_strips_leading_slash_and_dots() {
    assert_eq!(normalize_asset_path("/img/./a.jpg").unwrap(), "img/a.jpg");
    assert_eq!(normalize_asset_path("img\\b.png").unwrap(), "img/b.png");
    assert!(normalize_asset_path("../secret.png").is_err());
    assert!(normalize_asset_path("").is_err());
    assert!(normalize_asset_path("/").is_err());
}

#[test]
fn variant_names_are_content_addressed() {
    assert_eq!(
        variant_file_name("img/Hero.JPG", 0xabc, 640),
        "Hero.0000000000000abc.640w.jpg"
    );
    assert_eq!(variant_file_name("noext", 1, 10), "noext.0000000000000001.10w.png");
}

#[test]
fn zero_concurrency_is_rejected() {
    let opts = LocalPipelineOpts {
        max_concurrent: 0,
        ..Default::default()
    };
    assert!(LocalPipelineTransform::new(opts).is_err());
}

#[test]
fn writes_one_variant_per_width_in_order() {
    let root = temp_dir("local_variants");
    write_png(&root.join("src/img/photo.png"), 40, 20);

    let t = LocalPipelineTransform::new(LocalPipelineOpts {
        source_root: root.join("src"),
        output_dir: root.join("out"),
        public_base: "/_img/".to_string(),
        write_variants: true,
        max_concurrent: 2,
    })
    .unwrap();

    let image = ImageSource::from("/img/photo.png");
    let out = rt()
        .block_on(t.transform(&image, &[10, 20, 30], None, None))
        .unwrap();

    assert_eq!(out.iter().map(|b| b.width).collect::<Vec<_>>(), vec![10, 20, 30]);
    for bp in &out {
        assert!(bp.url.starts_with("/_img/photo."));
        assert!(bp.url.ends_with(&format!(".{}w.png", bp.width)));
        let name = bp.url.trim_start_matches("/_img/");
        let (w, h) = image::image_dimensions(root.join("out").join(name)).unwrap();
        assert_eq!(w, bp.width);
        assert_eq!(h, bp.width / 2);
    }

    let again = rt()
        .block_on(t.transform(&image, &[10, 20, 30], None, None))
        .unwrap();
    assert_eq!(out, again);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn requested_ratio_overrides_intrinsic_ratio() {
    let root = temp_dir("local_ratio");
    write_png(&root.join("a.png"), 40, 20);

    let t = LocalPipelineTransform::new(LocalPipelineOpts {
        source_root: root.clone(),
        output_dir: root.join("out"),
        ..Default::default()
    })
    .unwrap();

    let out = rt()
        .block_on(t.transform(&ImageSource::from("a.png"), &[16], Some(4), Some(4)))
        .unwrap();
    let name = out[0].url.trim_start_matches("/_img/");
    assert_eq!(
        image::image_dimensions(root.join("out").join(name)).unwrap(),
        (16, 16)
    );

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn widths_past_the_source_are_not_upscaled() {
    let root = temp_dir("local_no_upscale");
    write_png(&root.join("small.png"), 40, 20);

    let t = LocalPipelineTransform::new(LocalPipelineOpts {
        source_root: root.clone(),
        output_dir: root.join("out"),
        ..Default::default()
    })
    .unwrap();

    let out = rt()
        .block_on(t.transform(&ImageSource::from("small.png"), &[20, 640], None, None))
        .unwrap();
    assert_eq!(out.iter().map(|b| b.width).collect::<Vec<_>>(), vec![20, 640]);
    assert!(out[1].url.ends_with(".640w.png"));

    let dims = |bp: &ResolvedBreakpoint| {
        let name = bp.url.trim_start_matches("/_img/");
        image::image_dimensions(root.join("out").join(name)).unwrap()
    };
    assert_eq!(dims(&out[0]), (20, 10));
    assert_eq!(dims(&out[1]), (40, 20));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn upscale_clamp_keeps_requested_ratio() {
    assert_eq!(clamp_to_source(100, 50, 50), (50, 50));
    assert_eq!(clamp_to_source(100, 400, 200), (100, 50));
    assert_eq!(clamp_to_source(100, 100, 10), (100, 10));
}

#[test]
fn url_only_mode_does_not_write() {
    let root = temp_dir("local_dry");
    write_png(&root.join("a.png"), 8, 8);

    let t = LocalPipelineTransform::new(LocalPipelineOpts {
        source_root: root.clone(),
        output_dir: root.join("out"),
        write_variants: false,
        ..Default::default()
    })
    .unwrap();

    let out = rt()
        .block_on(t.transform(&ImageSource::from("a.png"), &[4, 8], None, None))
        .unwrap();
    assert_eq!(out.len(), 2);
    assert!(!root.join("out").exists());

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_source_and_remote_urls_fail() {
    let t = LocalPipelineTransform::new(LocalPipelineOpts {
        source_root: temp_dir("local_missing"),
        ..Default::default()
    })
    .unwrap();
    let rt = rt();
    assert!(
        rt.block_on(t.transform(&ImageSource::from("nope.png"), &[4], None, None))
            .is_err()
    );
    assert!(
        rt.block_on(t.transform(
            &ImageSource::from("https://example.com/a.png"),
            &[4],
            None,
            None
        ))
        .is_err()
    );
}
