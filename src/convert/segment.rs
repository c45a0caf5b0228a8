//! Slide segmentation.
//!
//! Two cooperating passes: [`split_blocks`] partitions a flat block sequence
//! into groups, one group per slide; [`blocks_to_slide`] materializes one
//! group into a slide, attaching headers and handling two-column layouts.

use super::block::blocks_to_shapes;
use super::context::{Context, NOTES_SIZE};
use super::inline::inlines_to_elems;
use super::ConvertState;
use crate::deck::Slide;
use crate::model::{Block, Inline};

/// Check whether a paragraph's leading inline is an image (possibly linked).
fn starts_with_image(content: &[Inline]) -> bool {
    match content.first() {
        Some(Inline::Image { .. }) => true,
        Some(Inline::Link { content, .. }) => {
            matches!(content.first(), Some(Inline::Image { .. }))
        }
        _ => false,
    }
}

/// Check whether a block forces its own slide group: an image-leading
/// paragraph, a table, or a two-column container.
fn forces_own_group(block: &Block) -> bool {
    match block {
        Block::Paragraph { content } | Block::Plain { content } => starts_with_image(content),
        Block::Table(_) => true,
        Block::Div { attr, .. } => attr.has_class("columns"),
        _ => false,
    }
}

/// Check whether the current group is exactly one heading at the split depth.
fn is_lone_heading_at(cur: &[Block], slide_level: u8) -> bool {
    matches!(cur, [Block::Heading { level, .. }] if *level == slide_level)
}

/// Partition a block sequence into slide groups.
///
/// A horizontal rule closes the current group; a heading shallower than the
/// split depth becomes its own singleton group; a heading at the split depth
/// starts a new group; finer headings stay in the current group. Blocks that
/// force their own slide (images, tables, two-column containers) close the
/// current group unless it is a lone heading at the split depth, which they
/// join instead.
pub fn split_blocks(blocks: &[Block], slide_level: u8) -> Vec<Vec<Block>> {
    let mut groups: Vec<Vec<Block>> = Vec::new();
    let mut cur: Vec<Block> = Vec::new();

    for block in blocks {
        match block {
            Block::HorizontalRule => {
                if !cur.is_empty() {
                    groups.push(std::mem::take(&mut cur));
                }
            }

            Block::Heading { level, .. } if *level < slide_level => {
                if !cur.is_empty() {
                    groups.push(std::mem::take(&mut cur));
                }
                groups.push(vec![block.clone()]);
            }

            Block::Heading { level, .. } if *level == slide_level => {
                if !cur.is_empty() {
                    groups.push(std::mem::take(&mut cur));
                }
                cur.push(block.clone());
            }

            _ if forces_own_group(block) => {
                if is_lone_heading_at(&cur, slide_level) {
                    cur.push(block.clone());
                    groups.push(std::mem::take(&mut cur));
                } else {
                    if !cur.is_empty() {
                        groups.push(std::mem::take(&mut cur));
                    }
                    groups.push(vec![block.clone()]);
                }
            }

            _ => cur.push(block.clone()),
        }
    }

    if !cur.is_empty() {
        groups.push(cur);
    }

    groups
}

/// Materialize one slide group into a slide.
pub fn blocks_to_slide(
    ctx: &Context,
    state: &mut ConvertState,
    slide_level: u8,
    blocks: &[Block],
) -> Slide {
    match blocks.split_first() {
        // A heading shallower than the split depth is a section divider.
        Some((Block::Heading { level, attr, content }, _)) if *level < slide_level => {
            state.anchors.register(&attr.id, ctx.slide_number);
            Slide::Title {
                header: inlines_to_elems(ctx, state, content),
            }
        }

        // A heading at the split depth becomes the slide header.
        Some((Block::Heading { level, attr, content }, rest)) if *level == slide_level => {
            state.anchors.register(&attr.id, ctx.slide_number);
            let header = inlines_to_elems(ctx, state, content);
            match blocks_to_slide(ctx, state, slide_level, rest) {
                Slide::Content { shapes, .. } => Slide::Content { header, shapes },
                Slide::TwoColumn { left, right, .. } => Slide::TwoColumn { header, left, right },
                other => other,
            }
        }

        Some((first, rest)) => {
            if let Block::Div { attr, content } = first {
                if attr.has_class("columns") {
                    if let Some(slide) = two_column_slide(ctx, state, slide_level, content, rest) {
                        return slide;
                    }
                }
            }
            content_slide(ctx, state, std::slice::from_ref(first), rest)
        }

        None => Slide::empty_content(),
    }
}

/// Build a two-column slide from a "columns" container's children, when the
/// first two children are properly tagged "column" containers.
fn two_column_slide(
    ctx: &Context,
    state: &mut ConvertState,
    slide_level: u8,
    div_content: &[Block],
    trailing: &[Block],
) -> Option<Slide> {
    let (left, right, extra) = match div_content {
        [Block::Div { attr: left_attr, content: left }, Block::Div { attr: right_attr, content: right }, extra @ ..]
            if left_attr.has_class("column") && right_attr.has_class("column") =>
        {
            (left, right, extra)
        }
        _ => return None,
    };

    // Content beyond the two recognized columns is lost, not an error.
    for block in extra.iter().chain(trailing) {
        state.block_not_rendered(block);
    }

    let left = column_shapes(ctx, state, slide_level, left);
    let right = column_shapes(ctx, state, slide_level, right);

    Some(Slide::TwoColumn {
        header: Vec::new(),
        left,
        right,
    })
}

/// Convert one column's blocks, truncating to the first sub-group.
///
/// Nested multi-slide columns are unsupported: sub-groups past the first are
/// reported as not rendered and discarded.
fn column_shapes(
    ctx: &Context,
    state: &mut ConvertState,
    slide_level: u8,
    blocks: &[Block],
) -> Vec<crate::deck::Shape> {
    let mut groups = split_blocks(blocks, slide_level).into_iter();
    let first = groups.next().unwrap_or_default();

    for group in groups {
        for block in &group {
            state.block_not_rendered(block);
        }
    }

    shapes_for_group(ctx, state, &first)
}

/// Build a headerless content slide from the group's blocks.
fn content_slide(
    ctx: &Context,
    state: &mut ConvertState,
    first: &[Block],
    rest: &[Block],
) -> Slide {
    let mut blocks: Vec<Block> = Vec::with_capacity(first.len() + rest.len());
    blocks.extend_from_slice(first);
    blocks.extend_from_slice(rest);

    Slide::Content {
        header: Vec::new(),
        shapes: shapes_for_group(ctx, state, &blocks),
    }
}

/// Convert a group's blocks into shapes, forcing the smaller footnote font
/// when building the synthesized notes slide.
fn shapes_for_group(
    ctx: &Context,
    state: &mut ConvertState,
    blocks: &[Block],
) -> Vec<crate::deck::Shape> {
    if ctx.in_notes_slide {
        blocks_to_shapes(&ctx.with_force_size(NOTES_SIZE), state, blocks)
    } else {
        blocks_to_shapes(ctx, state, blocks)
    }
}
