use super::*;
use crate::carousel::background::{DirectoryBackgrounds, SolidBackground};
use crate::foundation::core::{Canvas, Rgba8};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "carousel_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn builder_without_fonts(tmp: &Path) -> CarouselBuilder {
    let cfg = CompositorConfig {
        fonts_dir: tmp.join("no-fonts"),
        ..CompositorConfig::default()
    };
    CarouselBuilder::from_config(&cfg).unwrap()
}

fn strategy() -> ContentStrategy {
    ContentStrategy::from_json_str(
        r##"{
            "headline_slide_text": "Central Bank Signals Potential Rate Hike",
            "symbolic_slides": [
                {"slide_title": "The Market Reacts", "slide_text": "Investors wait.", "image_prompt": "a bull"},
                {"slide_title": "What Comes Next", "slide_text": "Borrowing costs rise.", "image_prompt": "a bear"}
            ],
            "post_caption": "Rates may rise.",
            "hashtags": ["#finance"]
        }"##,
    )
    .unwrap()
}

fn small_gray() -> SolidBackground {
    SolidBackground {
        canvas: Canvas::new(64, 48).unwrap(),
        color: Rgba8::rgb(128, 128, 128),
    }
}

#[test]
fn names_follow_post_and_slide_numbers() {
    let dir = Path::new("out");
    assert_eq!(slide_path(dir, 3, 1), dir.join("post_03_slide_01.png"));
    assert_eq!(slide_path(dir, 12, 4), dir.join("post_12_slide_04.png"));
    assert_eq!(caption_path(dir, 3), dir.join("post_03_caption.txt"));
    assert_eq!(
        temp_background_path(dir, 3, 2),
        dir.join("temp_bg_03_2.png")
    );
}

#[test]
fn missing_fonts_skip_every_slide_but_batch_completes() {
    let tmp = temp_dir("post_no_fonts");
    let out = tmp.join("out");
    let builder = builder_without_fonts(&tmp);

    let report = builder
        .render_post(&strategy(), 1, &out, &mut small_gray())
        .unwrap();

    assert!(report.slides.is_empty());
    let indices: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert!(
        report
            .failures
            .iter()
            .all(|f| f.kind == ErrorKind::FontNotFound)
    );
    assert!(!report.is_complete());

    let caption = report.caption.clone().unwrap();
    assert_eq!(caption, out.join("post_01_caption.txt"));
    let text = std::fs::read_to_string(&caption).unwrap();
    assert!(text.starts_with("--- POST CAPTION ---\n\nRates may rise."));

    for slide in 1..=3 {
        assert!(!slide_path(&out, 1, slide).exists());
    }
    assert!(!out.join("temp_bg_01_2.png").exists());
    assert!(!out.join("temp_bg_01_3.png").exists());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn empty_headline_is_not_a_failure() {
    let tmp = temp_dir("post_no_headline");
    let out = tmp.join("out");
    let builder = builder_without_fonts(&tmp);
    let strategy = ContentStrategy {
        headline_slide_text: String::new(),
        ..strategy()
    };

    let report = builder
        .render_post(&strategy, 2, &out, &mut small_gray())
        .unwrap();
    let indices: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(indices, vec![2, 3]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_background_is_recorded_per_slide() {
    let tmp = temp_dir("post_no_bg");
    let out = tmp.join("out");
    let bg_dir = tmp.join("bgs");
    std::fs::create_dir_all(&bg_dir).unwrap();
    let builder = builder_without_fonts(&tmp);
    let strategy = ContentStrategy {
        headline_slide_text: String::new(),
        ..strategy()
    };

    let mut backgrounds = DirectoryBackgrounds::new(&bg_dir);
    let report = builder
        .render_post(&strategy, 1, &out, &mut backgrounds)
        .unwrap();

    assert_eq!(report.failures.len(), 2);
    assert!(
        report
            .failures
            .iter()
            .all(|f| f.kind == ErrorKind::BackgroundLoad)
    );
    assert!(report.caption.is_some());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn output_folder_is_stamped() {
    let tmp = temp_dir("post_folder");
    let dir = create_output_folder(&tmp, "2024-05-01_09-30-00").unwrap();
    assert_eq!(dir, tmp.join("output_2024-05-01_09-30-00"));
    assert!(dir.is_dir());
    assert!(create_output_folder(&tmp, "").is_err());
    assert!(create_output_folder(&tmp, "a/b").is_err());

    std::fs::remove_dir_all(&tmp).ok();
}

struct Recording {
    inner: SolidBackground,
    seen: Vec<(usize, PathBuf)>,
}

impl BackgroundSource for Recording {
    fn produce(&mut self, request: BackgroundRequest<'_>, path: &Path) -> CarouselResult<()> {
        self.seen.push((request.slide_number, path.to_path_buf()));
        self.inner.produce(request, path)
    }
}

#[test]
fn temp_backgrounds_are_named_by_output_slide() {
    let tmp = temp_dir("post_temp_names");
    let out = tmp.join("out");
    let builder = builder_without_fonts(&tmp);
    let mut source = Recording {
        inner: small_gray(),
        seen: Vec::new(),
    };

    builder
        .render_post(&strategy(), 7, &out, &mut source)
        .unwrap();

    assert_eq!(
        source.seen,
        vec![
            (1, out.join("temp_bg_07_2.png")),
            (2, out.join("temp_bg_07_3.png")),
        ]
    );
    assert!(source.seen.iter().all(|(_, p)| !p.exists()));

    std::fs::remove_dir_all(&tmp).ok();
}
