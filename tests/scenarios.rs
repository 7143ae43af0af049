use html_parser::{NodeKind, Parser};

fn parse(input: &str) -> html_parser::Document {
    Parser::new().parse(input).expect("lenient parse never fails")
}

#[test]
fn scenario_basic_body_paragraph() {
    let document = parse("<html><body><p>Hello World</p></body></html>");

    let bodies = document.get_elements_by_tag_name("body");
    assert_eq!(bodies.len(), 1);

    let paragraphs = document.get_elements_by_tag_name("p");
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].borrow().get_text_content(), "Hello World");
}

#[test]
fn scenario_void_link_element() {
    let document = parse(
        "<html><head><link rel=\"stylesheet\" href=\"style.css\"></head><body></body></html>",
    );

    let links = document.get_elements_by_tag_name("link");
    assert_eq!(links.len(), 1);
    let link = links[0].borrow();
    assert_eq!(link.get_attribute("rel"), "stylesheet");
    assert_eq!(link.get_attribute("href"), "style.css");
    assert!(link.children().is_empty());
}

#[test]
fn scenario_style_raw_text() {
    let document =
        parse("<html><head><style>body { color: red; }</style></head><body></body></html>");

    let styles = document.get_elements_by_tag_name("style");
    assert_eq!(styles.len(), 1);
    assert_eq!(
        styles[0].borrow().get_text_content(),
        "body { color: red; }"
    );
}

#[test]
fn scenario_title_no_entity_decoding() {
    let document = parse("<html><head><title>Hello & Welcome</title></head><body></body></html>");

    let titles = document.get_elements_by_tag_name("title");
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].borrow().get_text_content(), "Hello & Welcome");
}

#[test]
fn scenario_script_embedded_end_tag_terminates_raw_text() {
    let document = parse("<script>var x = '</script>';</script>");

    let scripts = document.get_elements_by_tag_name("script");
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].borrow().get_text_content(), "var x = '");
}

#[test]
fn scenario_leading_whitespace_dropped() {
    let document = parse("    \n\t  <html><body></body></html>");

    let bodies = document.get_elements_by_tag_name("body");
    assert_eq!(bodies.len(), 1);
}

#[test]
fn scenario_xml_declaration_and_doctype_produce_no_elements() {
    let document = parse("<?xml version=\"1.0\" encoding=\"UTF-8\"?><!DOCTYPE html><html><body></body></html>");

    let html_elements = document.get_elements_by_tag_name("html");
    assert_eq!(html_elements.len(), 1);
}

#[test]
fn scenario_script_with_markup_looking_body() {
    let document = parse("<script><div></p></span></script>");

    let scripts = document.get_elements_by_tag_name("script");
    assert_eq!(scripts.len(), 1);
    assert_eq!(
        scripts[0].borrow().get_text_content(),
        "<div></p></span>"
    );
}

#[test]
fn implicit_html_head_body_are_synthesized() {
    let document = parse("<p>fragment only</p>");

    let root = document.root();
    assert_eq!(root.borrow().kind(), NodeKind::Document);

    let html_elements = document.get_elements_by_tag_name("html");
    assert_eq!(html_elements.len(), 1);
    let heads = document.get_elements_by_tag_name("head");
    assert_eq!(heads.len(), 1);
    let bodies = document.get_elements_by_tag_name("body");
    assert_eq!(bodies.len(), 1);
}

#[test]
fn start_tag_case_is_lowercased_on_insertion() {
    let document = parse("<HTML><BODY><P>text</P></BODY></HTML>");

    assert_eq!(document.get_elements_by_tag_name("p").len(), 1);
    assert_eq!(document.get_elements_by_tag_name("P").len(), 0);
}

#[test]
fn unmatched_end_tag_is_ignored_in_lenient_mode() {
    let document = parse("<html><body></div><p>still here</p></body></html>");

    let paragraphs = document.get_elements_by_tag_name("p");
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].borrow().get_text_content(), "still here");
}

#[test]
fn unmatched_end_tag_fails_in_strict_mode() {
    let parser = Parser::builder().strict_mode(true).build();
    let result = parser.parse("<html><body></div></body></html>");
    assert!(result.is_err());
}

#[test]
fn duplicate_head_fails_in_strict_mode() {
    let parser = Parser::builder().strict_mode(true).build();
    let result = parser.parse("<html><head><head></head></head></html>");
    assert!(result.is_err());
}

#[test]
fn attribute_with_duplicate_name_keeps_last_value() {
    let document = parse("<html><body><p id=\"first\" id=\"second\">x</p></body></html>");

    let paragraphs = document.get_elements_by_tag_name("p");
    assert_eq!(paragraphs[0].borrow().get_attribute("id"), "second");
}

#[test]
fn unquoted_and_single_quoted_attribute_values() {
    let document = parse("<html><body><p class=note id='main'>x</p></body></html>");

    let paragraphs = document.get_elements_by_tag_name("p");
    let p = paragraphs[0].borrow();
    assert_eq!(p.get_attribute("class"), "note");
    assert_eq!(p.get_attribute("id"), "main");
}

#[test]
fn text_node_is_never_a_direct_child_of_document() {
    let document = parse("stray text with no tags at all");

    for child in document.root().borrow().children() {
        assert_eq!(child.borrow().kind(), NodeKind::Element);
    }
}

#[test]
fn parser_instance_is_reusable_across_calls() {
    let parser = Parser::new();
    let first = parser.parse("<html><body><p>one</p></body></html>").unwrap();
    let second = parser.parse("<html><body><p>two</p></body></html>").unwrap();

    assert_eq!(
        first.get_elements_by_tag_name("p")[0].borrow().get_text_content(),
        "one"
    );
    assert_eq!(
        second.get_elements_by_tag_name("p")[0].borrow().get_text_content(),
        "two"
    );
}

