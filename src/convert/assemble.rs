//! Presentation assembly.
//!
//! Orchestrates the full pipeline: the optional metadata slide, a reserved
//! position for the table-of-contents slide, body slides in source order,
//! and finally the slides re-materialized from the side registries (table
//! of contents, footnotes). Registry reads happen strictly after all body
//! conversion completes.

use super::context::Context;
use super::inline::inlines_to_elems;
use super::segment::{blocks_to_slide, split_blocks};
use super::{Conversion, ConvertState};
use crate::deck::{BulletType, Paragraph, Presentation, Shape, Slide};
use crate::model::{Block, Document, Inline, ListAttributes};
use crate::options::ConvertOptions;

/// Default header for the table-of-contents slide.
const DEFAULT_TOC_TITLE: &str = "Table of Contents";

/// Default header for the footnotes slide.
const DEFAULT_NOTES_TITLE: &str = "Notes";

/// Infer the slide split level from the document's heading structure.
///
/// The inferred level is the shallowest heading immediately followed by
/// non-heading, non-rule content somewhere in the document; 1 when no
/// heading qualifies.
pub fn infer_slide_level(blocks: &[Block]) -> u8 {
    let mut inferred: Option<u8> = None;

    for pair in blocks.windows(2) {
        if let [Block::Heading { level, .. }, next] = pair {
            if !matches!(next, Block::Heading { .. } | Block::HorizontalRule) {
                inferred = Some(inferred.map_or(*level, |l| l.min(*level)));
            }
        }
    }

    inferred.unwrap_or(1)
}

/// Run the full conversion pipeline over one document.
pub fn assemble(doc: &Document, options: &ConvertOptions) -> Conversion {
    let mut state = ConvertState::default();
    let slide_level = options
        .slide_level
        .unwrap_or_else(|| infer_slide_level(&doc.blocks));

    let metadata_slide = metadata_slide(&mut state, &doc.meta);

    // The table-of-contents position is reserved up front so anchors
    // registered during body conversion resolve to final slide numbers.
    let toc_number = metadata_slide.is_some() as usize + 1;
    let body_start = toc_number + options.include_toc as usize;

    let groups = split_blocks(&doc.blocks, slide_level);
    let mut body_slides = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let ctx = Context::for_slide(body_start + i);
        body_slides.push(blocks_to_slide(&ctx, &mut state, slide_level, group));
    }

    // Body conversion is complete; the registries are read-only from here.
    let notes_slide = notes_slide(
        &mut state,
        options,
        slide_level,
        body_start + body_slides.len(),
    );
    let toc_slide = options
        .include_toc
        .then(|| toc_slide(&mut state, options, &doc.blocks, toc_number));

    let mut slides = Vec::new();
    slides.extend(metadata_slide);
    slides.extend(toc_slide);
    slides.extend(body_slides);
    slides.extend(notes_slide);

    Conversion {
        presentation: Presentation { slides },
        diagnostics: std::mem::take(&mut state.diagnostics),
    }
}

/// Build the metadata slide, unless every metadata field is absent.
fn metadata_slide(state: &mut ConvertState, meta: &crate::model::Metadata) -> Option<Slide> {
    if meta.is_empty() {
        return None;
    }

    let ctx = Context::for_slide(1);
    Some(Slide::Metadata {
        title: inlines_to_elems(&ctx, state, &meta.title),
        subtitle: inlines_to_elems(&ctx, state, &meta.subtitle),
        authors: meta
            .authors
            .iter()
            .map(|a| inlines_to_elems(&ctx, state, a))
            .collect(),
        date: inlines_to_elems(&ctx, state, &meta.date),
    })
}

/// Build the footnotes slide from the footnote registry, if any footnotes
/// were registered during body conversion.
fn notes_slide(
    state: &mut ConvertState,
    options: &ConvertOptions,
    slide_level: u8,
    slide_number: usize,
) -> Option<Slide> {
    if state.footnotes.is_empty() {
        return None;
    }

    let items: Vec<Vec<Block>> = state.footnotes.iter().map(|(_, body)| body.clone()).collect();
    let list = Block::OrderedList {
        attrs: ListAttributes::default(),
        items,
    };

    let ctx = Context {
        in_notes_slide: true,
        ..Context::for_slide(slide_number)
    };
    let header = title_elems(&ctx, state, &options.notes_title, DEFAULT_NOTES_TITLE);

    match blocks_to_slide(&ctx, state, slide_level, &[list]) {
        Slide::Content { shapes, .. } => Some(Slide::Content { header, shapes }),
        other => Some(other),
    }
}

/// Build the table-of-contents slide by re-scanning the document's headings
/// and resolving their anchors against the registry.
fn toc_slide(
    state: &mut ConvertState,
    options: &ConvertOptions,
    blocks: &[Block],
    slide_number: usize,
) -> Slide {
    let ctx = Context::for_slide(slide_number);
    let header = title_elems(&ctx, state, &options.toc_title, DEFAULT_TOC_TITLE);

    let mut entries = Vec::new();
    collect_headings(blocks, options.toc_depth, &mut entries);

    let mut paragraphs = Vec::with_capacity(entries.len());
    for (level, id, content) in entries {
        let entry_ctx = match state.anchors.resolve(&id) {
            Some(target) => ctx.with_hyperlink(crate::deck::Hyperlink::to_slide(target)),
            None => ctx.clone(),
        };
        let elems = inlines_to_elems(&entry_ctx, state, &content);

        let mut props = ctx.para.clone();
        props.level = level.saturating_sub(1);
        props.bullet = Some(BulletType::Bullet);
        paragraphs.push(Paragraph::new(props, elems));
    }

    Slide::Content {
        header,
        shapes: vec![Shape::text_box(paragraphs)],
    }
}

/// Collect `(level, id, content)` for each heading no deeper than `depth`,
/// descending into generic containers.
fn collect_headings(blocks: &[Block], depth: u8, out: &mut Vec<(u8, String, Vec<Inline>)>) {
    for block in blocks {
        match block {
            Block::Heading {
                level,
                attr,
                content,
            } if *level <= depth => {
                out.push((*level, attr.id.clone(), content.clone()));
            }
            Block::Div { attr, content } if attr.classes != ["notes"] => {
                collect_headings(content, depth, out);
            }
            _ => {}
        }
    }
}

/// Convert an optional title override, falling back to a default string.
fn title_elems(
    ctx: &Context,
    state: &mut ConvertState,
    title: &Option<Vec<Inline>>,
    default: &str,
) -> Vec<crate::deck::ParaElem> {
    match title {
        Some(inlines) => inlines_to_elems(ctx, state, inlines),
        None => inlines_to_elems(ctx, state, &[Inline::str(default)]),
    }
}
