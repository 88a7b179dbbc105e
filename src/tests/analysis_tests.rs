use super::fixtures;
use crate::analysis::analyze_page;

#[test]
fn analyze_page_reads_the_title_and_body_text() {
    let html = fixtures::load_html_fixture("sample_page");
    let analysis = analyze_page(&html);

    assert_eq!(analysis.title.as_deref(), Some("Checkout - Example Shop"));
    assert!(analysis.body_text_len > 0);
    assert!(!analysis.looks_blank());
}

#[test]
fn analyze_page_treats_an_empty_title_as_missing() {
    let html = r#"
    <html>
    <head><title></title></head>
    <body><p>Something went wrong</p></body>
    </html>
    "#;

    let analysis = analyze_page(html);

    assert!(analysis.title.is_none());
    assert!(analysis.body_text_len > 0);
}

#[test]
fn analyze_page_flags_blank_documents() {
    let analysis = analyze_page("<html></html>");

    assert!(analysis.looks_blank());
}
