use super::*;

#[test]
fn renders_heading_and_paragraph() {
    let html = render_html("# Title\n\nBody text.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>Body text.</p>"));
}

#[test]
fn strikethrough_extension_enabled() {
    let html = render_html("~~gone~~");
    assert!(html.contains("<del>gone</del>"));
}

#[test]
fn table_extension_enabled() {
    let html = render_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render_html(""), "");
}
