use super::*;

// =============================================================
// Markdown rendering
// =============================================================

#[test]
fn render_markdown_produces_html() {
    let html = render_markdown("## Day one\n\nWe left *early*.");
    assert!(html.contains("<h2>Day one</h2>"));
    assert!(html.contains("<em>early</em>"));
}

#[test]
fn render_markdown_strips_raw_html() {
    let html = render_markdown("safe <script>alert(1)</script> text");
    assert!(!html.contains("<script>"));
    assert!(html.contains("safe"));
}

#[test]
fn render_markdown_keeps_tables_enabled() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}
