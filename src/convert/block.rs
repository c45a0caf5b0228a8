//! Block node conversion.
//!
//! Turns block-level nodes into slide paragraphs, and full block sequences
//! into shapes. The ambient [`Context`] is extended (never mutated) for
//! nested content: indentation, bullet state, quotation and code styling.

use super::context::Context;
use super::inline::inlines_to_elems;
use super::ConvertState;
use crate::deck::{
    merge_adjacent_text_boxes, BulletType, Graphic, Hyperlink, ParaElem, Paragraph, PicProps,
    Shape, TableCell, TableProps,
};
use crate::model::{Block, Cell, Definition, Inline, Table};

/// Convert a block sequence into paragraphs under one ambient context.
pub fn blocks_to_paragraphs(
    ctx: &Context,
    state: &mut ConvertState,
    blocks: &[Block],
) -> Vec<Paragraph> {
    blocks
        .iter()
        .flat_map(|b| block_to_paragraphs(ctx, state, b))
        .collect()
}

/// Convert one block into zero or more paragraphs.
pub fn block_to_paragraphs(
    ctx: &Context,
    state: &mut ConvertState,
    block: &Block,
) -> Vec<Paragraph> {
    match block {
        Block::Paragraph { content } | Block::Plain { content } => {
            let elems = inlines_to_elems(ctx, state, content);
            vec![Paragraph::new(ctx.para.clone(), elems)]
        }

        Block::LineBlock { lines } => {
            let mut elems = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    elems.push(ParaElem::Break);
                }
                elems.extend(inlines_to_elems(ctx, state, line));
            }
            vec![Paragraph::new(ctx.para.clone(), elems)]
        }

        Block::CodeBlock { attr, text } => {
            // A code block is a paragraph holding one code span, indented.
            let code_ctx = ctx.with_code_indent();
            let para = Block::Paragraph {
                content: vec![Inline::Code {
                    attr: attr.clone(),
                    text: text.clone(),
                }],
            };
            block_to_paragraphs(&code_ctx, state, &para)
        }

        Block::BlockQuote { content } => match content.split_first() {
            // A quote whose first child is a list is treated transparently:
            // the list renders as an ordinary list, remaining children as a
            // nested quote. Incremental reveal itself is unsupported.
            Some((list @ (Block::BulletList { .. } | Block::OrderedList { .. }), rest)) => {
                let mut paras = block_to_paragraphs(ctx, state, list);
                if !rest.is_empty() {
                    let quoted = Block::BlockQuote {
                        content: rest.to_vec(),
                    };
                    paras.extend(block_to_paragraphs(ctx, state, &quoted));
                }
                paras
            }
            _ => blocks_to_paragraphs(&ctx.with_block_quote(), state, content),
        },

        // Headings reaching this layer sit below the slide split depth;
        // headings at or above it are consumed by the segmenter.
        Block::Heading { attr, content, .. } => {
            state.anchors.register(&attr.id, ctx.slide_number);
            let heading_ctx = ctx.with_heading_style();
            let elems = inlines_to_elems(&heading_ctx, state, content);
            vec![Paragraph::new(heading_ctx.para.clone(), elems)]
        }

        Block::BulletList { items } => list_to_paragraphs(ctx, state, BulletType::Bullet, items),

        Block::OrderedList { attrs, items } => {
            list_to_paragraphs(ctx, state, BulletType::AutoNumbering { attrs: *attrs }, items)
        }

        Block::DefinitionList { items } => {
            let mut paras = Vec::new();
            for Definition { term, definitions } in items {
                let term_block = Block::Paragraph {
                    content: vec![Inline::Strong {
                        content: term.clone(),
                    }],
                };
                paras.extend(block_to_paragraphs(ctx, state, &term_block));
                for definition in definitions {
                    let quoted = Block::BlockQuote {
                        content: definition.clone(),
                    };
                    paras.extend(block_to_paragraphs(ctx, state, &quoted));
                }
            }
            paras
        }

        // Tables are intercepted at the shape layer; one reaching this
        // layer is degenerate and contributes nothing.
        Block::Table(_) => Vec::new(),

        Block::Div { attr, content } => {
            // Speaker-notes containers belong to a separate pipeline and
            // are never inlined into the visible slide.
            if attr.classes == ["notes"] {
                return Vec::new();
            }
            blocks_to_paragraphs(ctx, state, content)
        }

        Block::HorizontalRule | Block::RawBlock { .. } => {
            state.block_not_rendered(block);
            Vec::new()
        }
    }
}

/// Convert list items one nesting level deeper under the given bullet kind.
///
/// Only the first block of each item carries the bullet marker; the item's
/// remaining blocks suppress it, so multi-paragraph items show one marker.
fn list_to_paragraphs(
    ctx: &Context,
    state: &mut ConvertState,
    bullet: BulletType,
    items: &[Vec<Block>],
) -> Vec<Paragraph> {
    let item_ctx = ctx.with_list(bullet);
    let rest_ctx = item_ctx.without_bullet();

    let mut paras = Vec::new();
    for item in items {
        if let Some((first, rest)) = item.split_first() {
            paras.extend(block_to_paragraphs(&item_ctx, state, first));
            paras.extend(blocks_to_paragraphs(&rest_ctx, state, rest));
        }
    }
    paras
}

/// If the paragraph content is an image, or a link wrapping a single image,
/// return the image parts: path, attributes, optional link, and the
/// remaining inline content.
fn leading_image(content: &[Inline]) -> Option<(String, crate::model::Attr, Option<Hyperlink>, &[Inline])> {
    let (first, rest) = content.split_first()?;
    match first {
        Inline::Image { attr, target, .. } => {
            Some((target.url.clone(), attr.clone(), None, rest))
        }
        Inline::Link {
            content: link_content,
            target: link_target,
            ..
        } => match link_content.as_slice() {
            [Inline::Image { attr, target, .. }] => {
                let link = Hyperlink {
                    url: link_target.url.clone(),
                    title: link_target.title.clone(),
                };
                Some((target.url.clone(), attr.clone(), Some(link), rest))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Convert one block into a shape.
fn block_to_shape(ctx: &Context, state: &mut ConvertState, block: &Block) -> Shape {
    match block {
        Block::Paragraph { content } | Block::Plain { content } => {
            if let Some((path, attr, hyperlink, caption)) = leading_image(content) {
                return Shape::Picture {
                    props: PicProps { hyperlink },
                    path,
                    attr,
                    caption: inlines_to_elems(ctx, state, caption),
                };
            }
            Shape::text_box(block_to_paragraphs(ctx, state, block))
        }

        Block::Table(table) => table_to_shape(ctx, state, table),

        _ => Shape::text_box(block_to_paragraphs(ctx, state, block)),
    }
}

/// Convert a table block into a graphic frame.
fn table_to_shape(ctx: &Context, state: &mut ConvertState, table: &Table) -> Shape {
    let cell_to_paragraphs = |state: &mut ConvertState, cell: &Cell| -> TableCell {
        blocks_to_paragraphs(ctx, state, &cell.content)
    };

    let has_header_row = table.has_header();
    let header: Vec<TableCell> = if has_header_row {
        table
            .header
            .iter()
            .map(|c| cell_to_paragraphs(state, c))
            .collect()
    } else {
        Vec::new()
    };

    let rows: Vec<Vec<TableCell>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|c| cell_to_paragraphs(state, c)).collect())
        .collect();

    let caption = inlines_to_elems(ctx, state, &table.caption);

    Shape::GraphicFrame {
        graphics: vec![Graphic::Table {
            props: TableProps {
                has_header_row,
                has_banded_rows: true,
            },
            header,
            rows,
        }],
        caption,
    }
}

/// Convert a block sequence into shapes, merging adjacent text boxes and
/// dropping empty ones.
pub fn blocks_to_shapes(ctx: &Context, state: &mut ConvertState, blocks: &[Block]) -> Vec<Shape> {
    let shapes = blocks
        .iter()
        .map(|b| block_to_shape(ctx, state, b))
        .collect();
    merge_adjacent_text_boxes(shapes)
}
