//! Visibility, leaf classification, leaf traversal and content tests

use fos_a11y::{A11yConfig, DocumentHost, DomUtil, HostTree, VisibilityOptions};
use fos_dom::{Document, NodeId};
use fos_html::parse;

const FIXTURE: &str = r#"
<form action="">
  <div id="normal_node">1</div>
  <div id="display_none" style="display: none">2</div>
  <div id="visibility_hidden" style="visibility: hidden">3</div>
  <div id="visibility_collapse" style="visibility: collapse">3b</div>
  <div id="opacity_zero" style="opacity: 0">4</div>
  <div id="opacity_partial" style="opacity: 0.5">4b</div>
  <div id="opacity_undefined">5</div>
  <select id="select_node"><option>5</option></select>
  <textarea id="textarea">6</textarea>
  <div id="forced_visible" style="visibility: hidden" aria-hidden="false">7</div>
  <p id="normal_para">----</p>
  <p id="presentation" role="presentation">----</p>
  <p id="aria_hidden" aria-hidden="true">----</p>
  <p id="only_spaces">    </p>
  <p id="only_tabs">		</p>
  <p id="only_newlines">

  </p>
  <p id="only_nbsp">&nbsp;</p>
  <p id="other_entity">&amp;</p>
  <img id="img">
  <img id="img_alt" alt="tree">
  <img id="img_blankalt" alt="">

  <input id="check" type="checkbox">
  <input id="check_checked" type="checkbox" checked>

  <span><p id="a">a</p></span>
  <span><p id="b">b</p><p id="c">c</p></span>
</form>

<a id="special_link1" href="http://google.com"><span id="empty_span"></span>
</a>
<a id="special_link2" href="http://google.com"><span>Text content</span></a>
<a id="special_link3"><span></span></a>

<div id="nested_visibility_hide" style="visibility: hidden">
  hide<div id="nested_visibility_show" style="visibility: visible">show</div>me
</div>
<div id="nested_display_none" style="display: none">
  nothing<div id="nested_display_block" style="display: block">will</div>show
</div>
"#;

fn fixture() -> Document {
    parse(FIXTURE).unwrap()
}

fn id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has no #{id}"))
}

fn first_child(doc: &Document, node: NodeId) -> NodeId {
    doc.tree().get(node).unwrap().first_child
}

#[test]
fn test_is_visible() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(util.is_visible(id(&doc, "normal_node")));
    assert!(!util.is_visible(id(&doc, "display_none")));
    assert!(!util.is_visible(id(&doc, "visibility_hidden")));
    assert!(!util.is_visible(id(&doc, "visibility_collapse")));
    assert!(!util.is_visible(id(&doc, "opacity_zero")));
    assert!(util.is_visible(id(&doc, "opacity_partial")));
    assert!(util.is_visible(id(&doc, "opacity_undefined")));
    assert!(util.is_visible(id(&doc, "forced_visible")));
}

#[test]
fn test_nested_visibility() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    let hide = id(&doc, "nested_visibility_hide");
    let show = id(&doc, "nested_visibility_show");
    assert!(util.is_visible(hide), "a visible child reveals the parent");
    assert!(!util.is_visible(first_child(&doc, hide)), "text of the hidden parent");
    assert!(util.is_visible(show));
    assert!(util.is_visible(first_child(&doc, show)));
    assert!(!util.is_visible(id(&doc, "nested_display_block")));
}

#[test]
fn test_visibility_options() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(util.is_visible_with(
        id(&doc, "nested_display_block"),
        VisibilityOptions::skip_ancestors()
    ));
    assert!(!util.is_visible_with(
        id(&doc, "nested_visibility_hide"),
        VisibilityOptions::skip_descendants()
    ));
}

#[test]
fn test_aria_hidden_false_does_not_reveal_removed_content() {
    let doc = parse(
        r#"<div aria-hidden="false"><div id="x" style="display: none">secret</div></div>
           <div style="display: none"><p id="y" aria-hidden="false">gone</p></div>
           <div aria-hidden="false"><p id="z" style="opacity: 0">faded</p></div>
           <div aria-hidden="false"><p id="w" style="visibility: hidden">shown</p></div>"#,
    )
    .unwrap();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    for hidden in ["x", "y", "z"] {
        let node = id(&doc, hidden);
        assert!(!util.is_visible(node), "#{hidden}");
        assert!(!util.is_visible(first_child(&doc, node)), "text of #{hidden}");
        assert!(!util.has_content(node), "#{hidden}");
    }
    assert!(util.is_visible(id(&doc, "w")));
    assert!(util.has_content(id(&doc, "w")));
}

#[test]
fn test_visibility_of_foreign_handles() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(!util.is_visible(NodeId::NONE));
    assert!(!util.is_leaf_node(NodeId::NONE));
    assert!(!util.has_content(NodeId::NONE));
    assert_eq!(util.get_name(NodeId::NONE), "");
    assert_eq!(util.next_leaf_node(NodeId::NONE), None);
}

#[test]
fn test_is_leaf_node() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    let expectations = [
        ("normal_node", false),
        ("display_none", true),
        ("visibility_hidden", true),
        ("opacity_zero", true),
        ("select_node", true),
        ("textarea", true),
        ("normal_para", false),
        ("aria_hidden", true),
        ("special_link1", true),
        ("special_link2", true),
        ("special_link3", false),
        ("nested_visibility_hide", false),
    ];
    for (name, leaf) in expectations {
        assert_eq!(util.is_leaf_node(id(&doc, name)), leaf, "#{name}");
    }
}

#[test]
fn test_link_containing_heading_is_not_leaf() {
    let doc = parse(
        r#"<a id='leaf' href='google.com'><strong>Click</strong><div>here</div></a>
           <a id='non-leaf' href='google.com'>Click <h2>here</h2></a>"#,
    )
    .unwrap();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(util.is_leaf_node(id(&doc, "leaf")));
    assert!(!util.is_leaf_node(id(&doc, "non-leaf")));
}

#[test]
fn test_leaf_roles_and_embedded_content() {
    let doc = parse(
        r#"<div id="slider" role="slider"><span>7</span></div>
           <div id="video"><video id="v"><source src="a.mp4"></video></div>
           <math id="m"><mi>x</mi></math>
           <h3 id="h">Title <b>bold</b></h3>
           <h3 id="hc">Search <input type="text"></h3>"#,
    )
    .unwrap();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(util.is_leaf_node(id(&doc, "slider")));
    assert!(util.is_leaf_node(id(&doc, "v")));
    assert!(!util.is_leaf_node(id(&doc, "video")));
    assert!(util.is_leaf_node(id(&doc, "m")));
    assert!(util.is_leaf_node(id(&doc, "h")));
    assert!(!util.is_leaf_node(id(&doc, "hc")));
}

#[test]
fn test_composite_widget_with_focusable_children_is_not_leaf() {
    let doc = parse(
        r#"<div id="lb" role="listbox" tabindex="0">
             <div role="option" tabindex="-1">One</div>
           </div>
           <div id="lb2" role="listbox" tabindex="0"><div role="option">One</div></div>"#,
    )
    .unwrap();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(!util.is_leaf_node(id(&doc, "lb")));
    assert!(util.is_leaf_node(id(&doc, "lb2")));
}

#[test]
fn test_leaf_node_traversal() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    let mut node = id(&doc, "a");
    node = util.directed_next_leaf_node(node, false).unwrap();
    let gap = host.text_content(node);
    assert!(!gap.is_empty() && gap.trim().is_empty(), "whitespace between spans: {gap:?}");
    node = util.directed_next_leaf_node(node, false).unwrap();
    assert_eq!(host.text_content(node), "b");
    node = util.directed_next_leaf_node(node, false).unwrap();
    assert_eq!(host.text_content(node), "c");

    node = util.previous_leaf_node(node).unwrap();
    assert_eq!(host.text_content(node), "b");
    node = util.previous_leaf_node(node).unwrap();
    assert_eq!(host.text_content(node), gap);
    node = util.previous_leaf_node(node).unwrap();
    assert_eq!(host.text_content(node), "a");
}

#[test]
fn test_traversal_walks_whole_document() {
    let doc = parse("<p id=only>x</p>").unwrap();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    let text = first_child(&doc, id(&doc, "only"));
    assert_eq!(util.next_leaf_node(text), None);
    // the head is display:none, so it is one opaque leaf
    assert_eq!(util.previous_leaf_node(text), doc.head());
    assert_eq!(util.next_leaf_node(doc.head().unwrap()), Some(text));
}

#[test]
fn test_traversal_stops_at_body() {
    let doc = parse("<p id=only>x</p>").unwrap();
    let host = DocumentHost::new(&doc);
    let config = A11yConfig {
        traverse_from_body: true,
        ..A11yConfig::default()
    };
    let util = DomUtil::with_config(&host, config);

    let body = doc.body().unwrap();
    let text = util.next_leaf_node(body).unwrap();
    assert_eq!(host.text_content(text), "x");
    assert_eq!(util.next_leaf_node(text), None);
    assert_eq!(util.previous_leaf_node(text), None);
}

#[test]
fn test_has_content() {
    let doc = fixture();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    let expectations = [
        ("normal_node", true),
        ("display_none", false),
        ("visibility_hidden", false),
        ("opacity_zero", false),
        ("select_node", true),
        ("textarea", true),
        ("normal_para", true),
        ("presentation", true),
        ("aria_hidden", false),
        ("only_spaces", false),
        ("only_tabs", false),
        ("only_newlines", false),
        ("only_nbsp", false),
        ("other_entity", true),
        ("img", true),
        ("img_alt", true),
        ("img_blankalt", false),
    ];
    for (name, content) in expectations {
        assert_eq!(util.has_content(id(&doc, name)), content, "#{name}");
    }
}

#[test]
fn test_has_content_special_containers() {
    let doc = parse(
        r#"<head><title id="t">Page</title></head>
           <body>
           <noscript id="ns">enable js</noscript>
           <div aria-hidden="true"><p id="under_hidden">text</p></div>
           <iframe id="frame" src="page.html"></iframe>
           <iframe id="js_frame" src="javascript:void(0)"></iframe>
           <form id="f">Name <input type="text"></form>
           <!-- note -->
           </body>"#,
    )
    .unwrap();
    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);

    assert!(!util.has_content(id(&doc, "t")));
    assert!(!util.has_content(id(&doc, "ns")));
    assert!(!util.has_content(id(&doc, "under_hidden")));
    assert!(util.has_content(id(&doc, "frame")));
    assert!(!util.has_content(id(&doc, "js_frame")));
    assert!(!util.has_content(id(&doc, "f")), "container of a control");

    let body = doc.body().unwrap();
    let comment = host
        .children(body)
        .find(|&n| host.kind(n) == Some(fos_a11y::NodeKind::Comment))
        .unwrap();
    assert!(!util.has_content(comment));
}
