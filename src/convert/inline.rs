//! Inline node conversion.
//!
//! Turns a sequence of inline nodes into a flat sequence of styled
//! [`ParaElem`]s under an ambient [`Context`]. Footnote bodies are
//! registered into the footnote registry as a side effect, in
//! document-encounter order.

use super::context::Context;
use super::ConvertState;
use crate::deck::{coalesce_runs, Hyperlink, ParaElem};
use crate::model::Inline;

/// Convert an inline sequence, coalescing identically styled adjacent runs.
pub fn inlines_to_elems(ctx: &Context, state: &mut ConvertState, inlines: &[Inline]) -> Vec<ParaElem> {
    let mut elems = Vec::new();
    for inline in inlines {
        elems.extend(inline_to_elems(ctx, state, inline));
    }
    coalesce_runs(elems)
}

/// Convert one inline node. Left-to-right order of children is preserved.
fn inline_to_elems(ctx: &Context, state: &mut ConvertState, inline: &Inline) -> Vec<ParaElem> {
    match inline {
        Inline::Str { text } => vec![ParaElem::run(ctx.run.clone(), text.clone())],

        // A literal space and a soft line break are both rendered as a single
        // space; slide renderers re-wrap text anyway, so the original
        // wrapping carries no information worth keeping.
        Inline::Space | Inline::SoftBreak => vec![ParaElem::run(ctx.run.clone(), " ")],

        Inline::LineBreak => vec![ParaElem::Break],

        Inline::Emph { content } => inlines_to_elems(&ctx.with_italic(), state, content),
        Inline::Strong { content } => inlines_to_elems(&ctx.with_bold(), state, content),
        Inline::Strikeout { content } => inlines_to_elems(&ctx.with_strikethrough(), state, content),
        Inline::Superscript { content } => inlines_to_elems(&ctx.with_superscript(), state, content),
        Inline::Subscript { content } => inlines_to_elems(&ctx.with_subscript(), state, content),
        Inline::SmallCaps { content } => inlines_to_elems(&ctx.with_small_caps(), state, content),

        Inline::Link { content, target, .. } => {
            let link = Hyperlink {
                url: target.url.clone(),
                title: target.title.clone(),
            };
            inlines_to_elems(&ctx.with_hyperlink(link), state, content)
        }

        // Code spans render as flat text; the code flag is the only styling.
        Inline::Code { text, .. } => {
            let code_ctx = ctx.with_code();
            inline_to_elems(&code_ctx, state, &Inline::str(text.clone()))
        }

        Inline::Math { kind, tex } => vec![ParaElem::Math {
            kind: *kind,
            tex: tex.clone(),
        }],

        Inline::Note { content } => {
            let ordinal = state.footnotes.register(content.clone());
            let marker = Inline::str(ordinal.to_string());
            inline_to_elems(&ctx.with_superscript(), state, &marker)
        }

        Inline::Span { content, .. } => inlines_to_elems(ctx, state, content),

        // Images are handled at the shape layer; raw inlines are opaque.
        Inline::Image { .. } | Inline::RawInline { .. } => Vec::new(),
    }
}
