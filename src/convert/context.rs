//! Ambient style context threaded through conversion.
//!
//! The context is a value with slide-conversion lifetime: read-only from the
//! perspective of any single node being converted. Child conversions extend
//! a clone via the `with_*` methods; a shared copy is never mutated.

use crate::deck::{
    Align, BulletType, Capitals, Hyperlink, ParaProps, RunProps, Strikethrough,
    SUBSCRIPT_BASELINE, SUPERSCRIPT_BASELINE,
};

/// Left margin in pixels forced on block quotations and code blocks.
pub const BLOCK_INDENT: u32 = 100;

/// Font size in pixels forced on block-quotation text.
pub const BLOCK_QUOTE_SIZE: u32 = 20;

/// Font size in pixels forced on the synthesized footnotes slide.
pub const NOTES_SIZE: u32 = 18;

/// Space in pixels inserted before an in-slide heading paragraph.
pub const HEADING_SPACE_BEFORE: u32 = 30;

/// The active formatting state at one point of the conversion.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Active character formatting
    pub run: RunProps,

    /// Active paragraph formatting
    pub para: ParaProps,

    /// 1-based number of the slide currently being built
    pub slide_number: usize,

    /// Conversion is occurring inside the synthesized footnotes slide
    pub in_notes_slide: bool,
}

impl Context {
    /// Create a context for the slide with the given number.
    pub fn for_slide(slide_number: usize) -> Self {
        Self {
            slide_number,
            ..Default::default()
        }
    }

    /// Extend with bold character formatting.
    pub fn with_bold(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.bold = true;
        ctx
    }

    /// Extend with italic character formatting.
    pub fn with_italic(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.italic = true;
        ctx
    }

    /// Extend with single strikethrough.
    pub fn with_strikethrough(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.strikethrough = Some(Strikethrough::Single);
        ctx
    }

    /// Extend with a superscript baseline shift.
    pub fn with_superscript(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.baseline = Some(SUPERSCRIPT_BASELINE);
        ctx
    }

    /// Extend with a subscript baseline shift.
    pub fn with_subscript(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.baseline = Some(SUBSCRIPT_BASELINE);
        ctx
    }

    /// Extend with small capitals.
    pub fn with_small_caps(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.capitals = Some(Capitals::Small);
        ctx
    }

    /// Extend with a hyperlink target.
    pub fn with_hyperlink(&self, link: Hyperlink) -> Self {
        let mut ctx = self.clone();
        ctx.run.hyperlink = Some(link);
        ctx
    }

    /// Extend with code formatting.
    pub fn with_code(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.code = true;
        ctx
    }

    /// Extend with block-quotation formatting: fixed indent, smaller text.
    pub fn with_block_quote(&self) -> Self {
        let mut ctx = self.clone();
        ctx.para.margin_left = Some(BLOCK_INDENT);
        ctx.run.block_quote = true;
        ctx.run.force_size = Some(BLOCK_QUOTE_SIZE);
        ctx
    }

    /// Extend with the fixed code-block indent.
    pub fn with_code_indent(&self) -> Self {
        let mut ctx = self.clone();
        ctx.para.margin_left = Some(BLOCK_INDENT);
        ctx
    }

    /// Extend for list items: one level deeper with the given bullet kind.
    ///
    /// Any inherited left-margin override is cleared; nesting level drives
    /// indentation inside lists.
    pub fn with_list(&self, bullet: BulletType) -> Self {
        let mut ctx = self.clone();
        ctx.para.level = self.para.level.saturating_add(1);
        ctx.para.bullet = Some(bullet);
        ctx.para.margin_left = None;
        ctx
    }

    /// Extend with the bullet marker suppressed.
    pub fn without_bullet(&self) -> Self {
        let mut ctx = self.clone();
        ctx.para.bullet = None;
        ctx
    }

    /// Extend with heading paragraph formatting: bold with leading space.
    pub fn with_heading_style(&self) -> Self {
        let mut ctx = self.clone();
        ctx.run.bold = true;
        ctx.para.space_before = Some(HEADING_SPACE_BEFORE);
        ctx
    }

    /// Extend with a forced font size in pixels.
    pub fn with_force_size(&self, size: u32) -> Self {
        let mut ctx = self.clone();
        ctx.run.force_size = Some(size);
        ctx
    }

    /// Extend with an alignment override.
    pub fn with_align(&self, align: Align) -> Self {
        let mut ctx = self.clone();
        ctx.para.align = Some(align);
        ctx
    }
}
