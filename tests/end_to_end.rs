//! End-to-end conversion scenarios.
//!
//! Each test drives the full pipeline through the public API and checks the
//! resulting slide structure.

use endeck::{
    convert, to_presentation, Attr, Block, BulletType, Cell, ConvertOptions, Definition,
    Diagnostic, Document, Graphic, Inline, ParaElem, Shape, Slide, Table, Target,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn heading(level: u8, id: &str, text: &str) -> Block {
    Block::heading(level, id, text)
}

fn columns(children: Vec<Block>) -> Block {
    Block::Div {
        attr: Attr::with_classes(vec!["columns".to_string()]),
        content: children,
    }
}

fn column(blocks: Vec<Block>) -> Block {
    Block::Div {
        attr: Attr::with_classes(vec!["column".to_string()]),
        content: blocks,
    }
}

fn header_text(slide: &Slide) -> String {
    slide
        .header()
        .unwrap_or_default()
        .iter()
        .filter_map(|e| e.text())
        .collect()
}

#[test]
fn title_slide_then_content_slide() {
    // A heading shallower than the split level becomes a section divider;
    // the paragraph lands on its own headerless slide.
    let doc = Document::from_blocks(vec![heading(1, "intro", "Intro"), Block::text("hello")]);
    let pres = to_presentation(&doc, &ConvertOptions::new().with_slide_level(2)).unwrap();

    assert_eq!(pres.len(), 2);
    match &pres.slides[0] {
        Slide::Title { header } => assert_eq!(header[0].text(), Some("Intro")),
        other => panic!("expected a title slide, got {:?}", other),
    }
    match &pres.slides[1] {
        Slide::Content { header, shapes } => {
            assert!(header.is_empty());
            match &shapes[0] {
                Shape::TextBox { paragraphs } => {
                    assert_eq!(paragraphs[0].plain_text(), "hello");
                }
                other => panic!("expected a text box, got {:?}", other),
            }
        }
        other => panic!("expected a content slide, got {:?}", other),
    }
}

#[test]
fn bullet_list_slide_with_header() {
    // [Heading(2, "Topic"), BulletList[[Para "a"], [Para "b"]]] with split level 2
    let doc = Document::from_blocks(vec![
        heading(2, "topic", "Topic"),
        Block::BulletList {
            items: vec![vec![Block::text("a")], vec![Block::text("b")]],
        },
    ]);
    let pres = to_presentation(&doc, &ConvertOptions::new().with_slide_level(2)).unwrap();

    assert_eq!(pres.len(), 1);
    match &pres.slides[0] {
        Slide::Content { header, shapes } => {
            assert_eq!(header[0].text(), Some("Topic"));
            assert_eq!(shapes.len(), 1);
            match &shapes[0] {
                Shape::TextBox { paragraphs } => {
                    assert_eq!(paragraphs.len(), 2);
                    for (para, text) in paragraphs.iter().zip(["a", "b"]) {
                        assert_eq!(para.props.bullet, Some(BulletType::Bullet));
                        assert_eq!(para.props.level, 1);
                        assert_eq!(para.plain_text(), text);
                    }
                }
                other => panic!("expected a text box, got {:?}", other),
            }
        }
        other => panic!("expected a content slide, got {:?}", other),
    }
}

#[test]
fn footnote_produces_marker_and_notes_slide() {
    let doc = Document::from_blocks(vec![Block::Paragraph {
        content: vec![
            Inline::str("see"),
            Inline::note(vec![Block::text("the details")]),
        ],
    }]);
    let pres = to_presentation(&doc, &ConvertOptions::default()).unwrap();

    assert_eq!(pres.len(), 2);
    match &pres.slides[0] {
        Slide::Content { shapes, .. } => match &shapes[0] {
            Shape::TextBox { paragraphs } => {
                let marker = paragraphs[0].elems.last().unwrap();
                match marker {
                    ParaElem::Run { props, text } => {
                        assert_eq!(text, "1");
                        assert!(props.baseline.unwrap() > 0);
                    }
                    other => panic!("expected a superscript run, got {:?}", other),
                }
            }
            other => panic!("expected a text box, got {:?}", other),
        },
        other => panic!("expected a content slide, got {:?}", other),
    }
    assert_eq!(header_text(pres.slides.last().unwrap()), "Notes");
}

#[test]
fn headerless_table_flags() {
    let table = Table {
        caption: Vec::new(),
        header: Vec::new(),
        rows: vec![vec![Cell::with_text("x"), Cell::with_text("y")]],
    };
    let doc = Document::from_blocks(vec![Block::Table(table)]);
    let pres = to_presentation(&doc, &ConvertOptions::default()).unwrap();

    match &pres.slides[0] {
        Slide::Content { shapes, .. } => match &shapes[0] {
            Shape::GraphicFrame { graphics, .. } => match &graphics[0] {
                Graphic::Table { props, .. } => {
                    assert!(!props.has_header_row);
                    assert!(props.has_banded_rows);
                }
            },
            other => panic!("expected a graphic frame, got {:?}", other),
        },
        other => panic!("expected a content slide, got {:?}", other),
    }
}

#[test]
fn no_qualifying_headings_single_content_slide() {
    let doc = Document::from_blocks(vec![
        Block::text("one"),
        Block::heading(3, "deep", "Deep"),
        Block::text("two"),
        Block::BulletList {
            items: vec![vec![Block::text("item")]],
        },
    ]);
    // Split level 2: the level-3 heading stays inside the slide.
    let pres = to_presentation(&doc, &ConvertOptions::new().with_slide_level(2)).unwrap();

    assert_eq!(pres.len(), 1);
    match &pres.slides[0] {
        Slide::Content { header, shapes } => {
            assert!(header.is_empty());
            assert_eq!(shapes.len(), 1);
        }
        other => panic!("expected a single content slide, got {:?}", other),
    }
}

#[test]
fn footnote_ordinals_strictly_increasing_across_slides() {
    let doc = Document::from_blocks(vec![
        heading(2, "one", "One"),
        Block::Paragraph {
            content: vec![
                Inline::note(vec![Block::text("n1")]),
                Inline::note(vec![Block::text("n2")]),
            ],
        },
        heading(2, "two", "Two"),
        Block::Paragraph {
            content: vec![Inline::note(vec![Block::text("n3")])],
        },
    ]);
    let pres = to_presentation(&doc, &ConvertOptions::new().with_slide_level(2)).unwrap();

    // Notes slide holds three numbered bodies in registration order.
    match pres.slides.last().unwrap() {
        Slide::Content { shapes, .. } => match &shapes[0] {
            Shape::TextBox { paragraphs } => {
                let texts: Vec<String> = paragraphs.iter().map(|p| p.plain_text()).collect();
                assert_eq!(texts, vec!["n1", "n2", "n3"]);
            }
            other => panic!("expected a text box, got {:?}", other),
        },
        other => panic!("expected the notes slide, got {:?}", other),
    }
}

#[test]
fn horizontal_rule_terminates_groups_without_empty_slides() {
    init_logs();
    let doc = Document::from_blocks(vec![
        Block::HorizontalRule,
        Block::text("a"),
        Block::HorizontalRule,
        Block::HorizontalRule,
        Block::text("b"),
    ]);
    let pres = to_presentation(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(pres.len(), 2);
}

#[test]
fn two_column_slide_with_extra_siblings() {
    init_logs();
    let doc = Document::from_blocks(vec![columns(vec![
        column(vec![Block::text("left")]),
        column(vec![Block::text("right")]),
        Block::text("extra one"),
        Block::text("extra two"),
    ])]);
    let conversion = convert(&doc, &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.presentation.len(), 1);
    match &conversion.presentation.slides[0] {
        Slide::TwoColumn { left, right, .. } => {
            assert_eq!(left.len(), 1);
            assert_eq!(right.len(), 1);
        }
        other => panic!("expected a two-column slide, got {:?}", other),
    }
    assert_eq!(
        conversion.diagnostics,
        vec![
            Diagnostic::BlockNotRendered {
                kind: "paragraph".to_string()
            },
            Diagnostic::BlockNotRendered {
                kind: "paragraph".to_string()
            },
        ]
    );
}

#[test]
fn mixed_inline_styling_end_to_end() {
    let doc = Document::from_blocks(vec![Block::Paragraph {
        content: vec![
            Inline::str("normal "),
            Inline::Strong {
                content: vec![
                    Inline::str("bold "),
                    Inline::Emph {
                        content: vec![Inline::link("both", "https://example.com")],
                    },
                ],
            },
        ],
    }]);
    let pres = to_presentation(&doc, &ConvertOptions::default()).unwrap();

    match &pres.slides[0] {
        Slide::Content { shapes, .. } => match &shapes[0] {
            Shape::TextBox { paragraphs } => {
                let elems = &paragraphs[0].elems;
                assert_eq!(elems.len(), 3);
                match &elems[2] {
                    ParaElem::Run { props, text } => {
                        assert_eq!(text, "both");
                        assert!(props.bold);
                        assert!(props.italic);
                        assert!(props.hyperlink.is_some());
                    }
                    other => panic!("expected a styled run, got {:?}", other),
                }
            }
            other => panic!("expected a text box, got {:?}", other),
        },
        other => panic!("expected a content slide, got {:?}", other),
    }
}

#[test]
fn definition_list_and_quote_render() {
    let doc = Document::from_blocks(vec![
        Block::DefinitionList {
            items: vec![Definition {
                term: vec![Inline::str("API")],
                definitions: vec![vec![Block::text("surface of a library")]],
            }],
        },
        Block::BlockQuote {
            content: vec![Block::text("quoted words")],
        },
    ]);
    let pres = to_presentation(&doc, &ConvertOptions::default()).unwrap();

    match &pres.slides[0] {
        Slide::Content { shapes, .. } => match &shapes[0] {
            Shape::TextBox { paragraphs } => {
                assert_eq!(paragraphs.len(), 3);
                assert_eq!(paragraphs[0].plain_text(), "API");
                assert!(paragraphs[1].props.margin_left.is_some());
                assert!(paragraphs[2].props.margin_left.is_some());
            }
            other => panic!("expected a text box, got {:?}", other),
        },
        other => panic!("expected a content slide, got {:?}", other),
    }
}

#[test]
fn linked_image_slide() {
    let doc = Document::from_blocks(vec![
        heading(2, "pic", "Pic"),
        Block::Paragraph {
            content: vec![Inline::Link {
                attr: Attr::new(),
                content: vec![Inline::image("alt", "chart.png")],
                target: Target::url("https://example.com/chart"),
            }],
        },
    ]);
    let pres = to_presentation(&doc, &ConvertOptions::new().with_slide_level(2)).unwrap();

    assert_eq!(pres.len(), 1);
    match &pres.slides[0] {
        Slide::Content { header, shapes } => {
            assert_eq!(header[0].text(), Some("Pic"));
            match &shapes[0] {
                Shape::Picture { props, path, .. } => {
                    assert_eq!(path, "chart.png");
                    assert_eq!(
                        props.hyperlink.as_ref().map(|l| l.url.as_str()),
                        Some("https://example.com/chart")
                    );
                }
                other => panic!("expected a picture, got {:?}", other),
            }
        }
        other => panic!("expected a content slide, got {:?}", other),
    }
}

#[test]
fn toc_links_resolve_to_body_slides() {
    let doc = Document::from_blocks(vec![
        heading(1, "part-one", "Part One"),
        heading(2, "details", "Details"),
        Block::text("content"),
    ]);
    let options = ConvertOptions::new().with_slide_level(2).with_toc(true);
    let pres = to_presentation(&doc, &options).unwrap();

    // Slide 1: TOC, slide 2: title "Part One", slide 3: content "Details".
    assert_eq!(pres.len(), 3);
    match &pres.slides[0] {
        Slide::Content { shapes, .. } => match &shapes[0] {
            Shape::TextBox { paragraphs } => {
                assert_eq!(paragraphs.len(), 2);
                let links: Vec<&str> = paragraphs
                    .iter()
                    .filter_map(|p| match &p.elems[0] {
                        ParaElem::Run { props, .. } => {
                            props.hyperlink.as_ref().map(|l| l.url.as_str())
                        }
                        _ => None,
                    })
                    .collect();
                assert_eq!(links, vec!["#slide-2", "#slide-3"]);
            }
            other => panic!("expected a text box, got {:?}", other),
        },
        other => panic!("expected the TOC slide, got {:?}", other),
    }
}

#[test]
fn inferred_slide_level_splits_body() {
    // No explicit split level: the level-2 headings are the shallowest
    // followed directly by content.
    let doc = Document::from_blocks(vec![
        heading(1, "part", "Part"),
        heading(2, "a", "A"),
        Block::text("content a"),
        heading(2, "b", "B"),
        Block::text("content b"),
    ]);
    let pres = to_presentation(&doc, &ConvertOptions::default()).unwrap();

    assert_eq!(pres.len(), 3);
    assert!(matches!(pres.slides[0], Slide::Title { .. }));
    assert_eq!(header_text(&pres.slides[1]), "A");
    assert_eq!(header_text(&pres.slides[2]), "B");
}
