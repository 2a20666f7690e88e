//! Comprehensive tests for fos-html
//!
//! Tests parsing edge cases that matter to the accessibility layer:
//! entity decoding, whitespace preservation, attributes and comments.

use fos_dom::{outer_html, NodeData};
use fos_html::{parse, HtmlParser};

#[test]
fn test_parse_minimal_html() {
    let doc = parse("").unwrap();
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
    assert!(doc.body().is_some());
}

#[test]
fn test_parse_text_only() {
    let doc = parse("Hello World").unwrap();
    let body = doc.body().unwrap();
    assert_eq!(doc.tree().text_content(body), "Hello World");
}

#[test]
fn test_parse_only_doctype() {
    let doc = parse("<!DOCTYPE html>").unwrap();
    let first = doc.tree().children(doc.tree().root()).next().map(|(_, n)| n.data.clone());
    assert!(matches!(first, Some(NodeData::Doctype { .. })));
}

#[test]
fn test_named_and_numeric_entities_decoded_once() {
    let doc = parse("<p id=p>&amp;lt; &amp; &#65; &nbsp;</p>").unwrap();
    let p = doc.get_element_by_id("p").unwrap();
    assert_eq!(doc.tree().text_content(p), "&lt; & A \u{a0}");
}

#[test]
fn test_attribute_names_lowercased() {
    let doc = parse(r#"<div ID="x" Aria-Label="Hi" data-Foo=bar></div>"#).unwrap();
    let div = doc.get_element_by_id("x").unwrap();
    assert_eq!(doc.tree().attribute(div, "aria-label"), Some("Hi"));
    assert_eq!(doc.tree().attribute(div, "data-foo"), Some("bar"));
}

#[test]
fn test_attribute_no_value() {
    let doc = parse("<select id=s multiple><option selected>a</option></select>").unwrap();
    let select = doc.get_element_by_id("s").unwrap();
    assert_eq!(doc.tree().attribute(select, "multiple"), Some(""));
}

#[test]
fn test_comments_kept() {
    let doc = parse("<div id=d><!-- note -->x</div>").unwrap();
    let div = doc.get_element_by_id("d").unwrap();
    let first = doc.tree().children(div).next().map(|(_, n)| n.data.clone());
    assert!(matches!(first, Some(NodeData::Comment(ref c)) if c == " note "));
}

#[test]
fn test_whitespace_between_elements_kept() {
    let doc = parse("<div id=d>\n  <p>a</p>\n  <p>b</p>\n</div>").unwrap();
    let div = doc.get_element_by_id("d").unwrap();
    assert_eq!(doc.tree().children(div).count(), 5);
}

#[test]
fn test_script_and_style_are_raw_text() {
    let doc = parse("<script id=s>if (a < b) {}</script><style id=st>p > a {}</style>").unwrap();
    let script = doc.get_element_by_id("s").unwrap();
    assert_eq!(doc.tree().text_content(script), "if (a < b) {}");
    let style = doc.get_element_by_id("st").unwrap();
    assert_eq!(outer_html(doc.tree(), style), r#"<style id="st">p > a {}</style>"#);
}

#[test]
fn test_textarea_content() {
    let doc = parse("<textarea id=t>Some <b>text</b></textarea>").unwrap();
    let textarea = doc.get_element_by_id("t").unwrap();
    assert_eq!(doc.control_value(textarea).as_deref(), Some("Some <b>text</b>"));
}

#[test]
fn test_unclosed_tags_recovered() {
    let doc = parse("<ul id=l><li>one<li>two</ul>").unwrap();
    let list = doc.get_element_by_id("l").unwrap();
    let items = doc
        .tree()
        .children(list)
        .filter(|(_, n)| n.as_element().is_some_and(|e| e.name == "li"))
        .count();
    assert_eq!(items, 2);
}

#[test]
fn test_parse_with_url() {
    let doc = HtmlParser::new()
        .parse_with_url("<a href='#x'>x</a>", "https://example.com/page.html")
        .unwrap();
    assert_eq!(doc.url(), "https://example.com/page.html");
}

#[test]
fn test_parse_deeply_nested() {
    let html = "<div>".repeat(200) + "deep" + &"</div>".repeat(200);
    let doc = parse(&html).unwrap();
    let body = doc.body().unwrap();
    assert_eq!(doc.tree().text_content(body), "deep");
}

#[test]
fn test_parse_utf8_content() {
    let doc = parse("<p id=p>日本語 — émoji 🎉</p>").unwrap();
    let p = doc.get_element_by_id("p").unwrap();
    assert_eq!(doc.tree().text_content(p), "日本語 — émoji 🎉");
}
