//! End-to-end fixtures for the public `extract` pipeline.

use htmltext::extract;

#[test]
fn empty_and_whitespace_input_yield_nothing() {
    assert_eq!(extract(""), "");
    assert_eq!(extract(" "), "");
    assert_eq!(extract("   \n\t  "), "");
}

#[test]
fn extraction_is_deterministic() {
    let html = "<div>text 1</div><p><div>text 2</div></p><span>tail (<b>x</b>)</span>";
    assert_eq!(extract(html), extract(html));
}

#[test]
fn inline_tags_join_on_one_line() {
    let html = "<span>field</span><span>value  of</span><span></span>";
    assert_eq!(extract(html), "field value of");
}

#[test]
fn nbsp_decodes_to_a_plain_space() {
    assert_eq!(extract("<h1>Foo&nbsp;Bar</h1>"), "Foo Bar");
}

#[test]
fn block_breaks_collapse_to_the_strongest() {
    let html = "<div>text 1</div><p><div>text 2</div></p>";
    assert_eq!(extract(html), "text 1\n\ntext 2");
}

#[test]
fn punctuation_hugs_the_preceding_word() {
    assert_eq!(
        extract("<div><span>field</span>, and more</div>"),
        "field, and more"
    );
    assert_eq!(extract("<div>end<span>.</span></div>"), "end.");
}

#[test]
fn open_brackets_hug_the_following_word() {
    assert_eq!(extract("<div>a (<b>boo</b>)</div>"), "a (boo)");
}

#[test]
fn raw_trailing_whitespace_forces_a_separator() {
    // `more ` ended in whitespace in the source, so the bang keeps its
    // distance even though bare punctuation would normally hug.
    assert_eq!(
        extract("<div><span>more </span>!<span>now</span></div>"),
        "more ! now"
    );
}

#[test]
fn mixed_inline_fragments_keep_their_spacing() {
    let html = "<div><span>по</span><span>ле</span>, and  ,  \
                <span>more </span>!<span>now</span></div>a (<b>boo</b>)";
    assert_eq!(extract(html), "по ле, and , more ! now\na (boo)");
}

#[test]
fn script_style_and_comment_content_never_appear() {
    let html = "<html><head><style>.div {}</style></head>\
                <body><script>var hidden = 1;</script><!-- secret --><p>Hello,   world!</p></body></html>";
    assert_eq!(extract(html), "Hello, world!");
}

#[test]
fn comments_between_words_leave_a_single_space() {
    assert_eq!(extract("<p>Hello<!-- secret -->world</p>"), "Hello world");
}

#[test]
fn xml_prologue_is_ignored() {
    let html = "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\
                <html><style>.div {}</style><body>Hello,   world!</p></body></html>";
    assert_eq!(extract(html), "Hello, world!");
}

#[test]
fn documents_with_only_removed_content_yield_nothing() {
    let html = "<!DOCTYPE html><html><body><p><video width=\"320\" height=\"240\" controls>\
                <source src=\"movie.mp4\" type=\"video/mp4\">\
                <source src=\"movie.ogg\" type=\"video/ogg\"></video></p></body></html>";
    assert_eq!(extract(html), "");
}

#[test]
fn form_subtrees_are_stripped_but_siblings_stay() {
    let html = "<div>before<form><input name=q><button>Go</button></form>after</div>";
    assert_eq!(extract(html), "before after");
}

#[test]
fn title_text_is_extracted_as_a_block() {
    assert_eq!(extract("<title>Hello</title><p>World</p>"), "Hello\n\nWorld");
}

#[test]
fn full_page_layout() {
    let html = "<title>  title  </title><div>text_1.<p>text_2 text_3</p>\
                <p id=\"demo\"></p><ul><li>text_4</li><li>text_5</li></ul>\
                <p>text_6<em>text_7</em>text_8</p>text_9</div>\
                <script>document.getElementById(\"demo\").innerHTML = \
                \"This should be skipped\";</script> <p>...text_10</p>";
    assert_eq!(
        extract(html),
        "title\n\ntext_1.\n\ntext_2 text_3\n\ntext_4\ntext_5\n\n\
         text_6 text_7 text_8\n\ntext_9\n\n...text_10"
    );
}

#[test]
fn hr_separates_without_stacking_breaks() {
    assert_eq!(extract("<p>a</p><hr><p>b</p>"), "a\n\nb");
}

#[test]
fn deeply_nested_markup_extracts_without_blowing_the_stack() {
    let depth = 400;
    let mut html = String::with_capacity(depth * 11 + 16);
    for _ in 0..depth {
        html.push_str("<span>");
    }
    html.push_str("deep");
    for _ in 0..depth {
        html.push_str("</span>");
    }
    assert_eq!(extract(&html), "deep");
}

#[test]
fn wide_documents_extract_line_per_block() {
    let blocks = 2_000;
    let mut html = String::with_capacity(blocks * 16);
    for i in 0..blocks {
        html.push_str("<div>b");
        html.push_str(&i.to_string());
        html.push_str("</div>");
    }
    let text = extract(&html);
    assert!(text.starts_with("b0\nb1\n"));
    assert!(text.ends_with("b1998\nb1999"));
    assert_eq!(text.lines().count(), blocks);
}
