use super::*;

// =============================================================
// Excerpts
// =============================================================

#[test]
fn excerpt_takes_the_first_paragraph() {
    let body = "First paragraph.\n\nSecond paragraph.";
    assert_eq!(excerpt(body), "First paragraph.");
}

#[test]
fn excerpt_skips_headings() {
    let body = "# Trip notes\n\nWe left at dawn.";
    assert_eq!(excerpt(body), "We left at dawn.");
}

#[test]
fn excerpt_clips_long_paragraphs() {
    let body = "x".repeat(200);
    let summary = excerpt(&body);
    assert_eq!(summary.chars().count(), EXCERPT_LEN + 1);
    assert!(summary.ends_with('…'));
}

#[test]
fn excerpt_of_empty_body_is_empty() {
    assert_eq!(excerpt(""), "");
}
