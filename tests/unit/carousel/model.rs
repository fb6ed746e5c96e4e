use super::*;

#[test]
fn missing_fields_default_to_empty() {
    let s = ContentStrategy::from_json_str(
        r#"{"symbolic_slides": [{"slide_title": "The Market Reacts"}]}"#,
    )
    .unwrap();
    assert_eq!(s.headline_slide_text, "");
    assert_eq!(s.symbolic_slides.len(), 1);
    assert_eq!(s.symbolic_slides[0].slide_title, "The Market Reacts");
    assert_eq!(s.symbolic_slides[0].slide_text, "");
    assert_eq!(s.symbolic_slides[0].image_prompt, "");
    assert!(s.hashtags.is_empty());
}

#[test]
fn full_record_parses_and_trims() {
    let s = ContentStrategy::from_json_str(
        r##"{
            "headline_slide_text": "  Central Bank Signals Potential Rate Hike ",
            "symbolic_slides": [
                {
                    "slide_title": "The Market Reacts",
                    "slide_text": "Investors are cautiously optimistic.\n",
                    "image_prompt": "A bull and a bear on a chessboard"
                }
            ],
            "post_caption": "Rates may rise.",
            "hashtags": ["#finance", " ", "#rates "]
        }"##,
    )
    .unwrap();
    assert_eq!(s.headline_slide_text, "Central Bank Signals Potential Rate Hike");
    assert_eq!(
        s.symbolic_slides[0].slide_text,
        "Investors are cautiously optimistic."
    );
    assert_eq!(s.hashtags, vec!["#finance", "#rates"]);
}

#[test]
fn unknown_fields_are_ignored_and_bad_json_is_serde_error() {
    assert!(ContentStrategy::from_json_str(r#"{"extra": 1}"#).is_ok());
    assert!(matches!(
        ContentStrategy::from_json_str(r#"{"symbolic_slides": 3}"#),
        Err(CarouselError::Serde(_))
    ));
}

#[test]
fn caption_document_has_both_sections() {
    let s = ContentStrategy {
        post_caption: "Rates may rise.".to_string(),
        hashtags: vec!["#finance".to_string(), "#rates".to_string()],
        ..ContentStrategy::default()
    };
    assert_eq!(
        s.caption_document(),
        "--- POST CAPTION ---\n\nRates may rise.\n\n--- HASHTAGS ---\n\n#finance #rates"
    );
    assert!(
        ContentStrategy::default()
            .caption_document()
            .contains("No caption generated.")
    );
}

#[test]
fn slide_without_text_is_detected() {
    assert!(SymbolicSlide::default().has_no_text());
    assert!(
        !SymbolicSlide {
            slide_text: "x".to_string(),
            ..SymbolicSlide::default()
        }
        .has_no_text()
    );
}

#[test]
fn empty_slides_lists_indices() {
    let s = ContentStrategy::from_json_str(
        r#"{"symbolic_slides": [{"slide_title": "A"}, {"image_prompt": "p"}, {"slide_text": " "}]}"#,
    )
    .unwrap();
    assert_eq!(s.empty_slides(), vec![1, 2]);
}

#[test]
fn null_fields_read_as_empty() {
    let s = ContentStrategy::from_json_str(
        r##"{
            "headline_slide_text": "H",
            "symbolic_slides": [
                {"slide_title": "T", "slide_text": null, "image_prompt": "p"},
                {"slide_title": null, "slide_text": "Body", "image_prompt": null},
                null
            ],
            "post_caption": null,
            "hashtags": ["#a", null, "#b"]
        }"##,
    )
    .unwrap();
    assert_eq!(s.headline_slide_text, "H");
    assert_eq!(s.symbolic_slides.len(), 3);
    assert_eq!(s.symbolic_slides[0].slide_text, "");
    assert_eq!(s.symbolic_slides[1].slide_title, "");
    assert_eq!(s.symbolic_slides[1].image_prompt, "");
    assert_eq!(s.symbolic_slides[2], SymbolicSlide::default());
    assert_eq!(s.post_caption, "");
    assert_eq!(s.hashtags, vec!["#a", "#b"]);
    assert_eq!(s.empty_slides(), vec![2]);
}

#[test]
fn null_collections_read_as_empty() {
    let s = ContentStrategy::from_json_str(
        r#"{"headline_slide_text": null, "symbolic_slides": null, "hashtags": null}"#,
    )
    .unwrap();
    assert_eq!(s, ContentStrategy::default());
}
