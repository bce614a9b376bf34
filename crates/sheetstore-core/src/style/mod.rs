//! Cell styling records
//!
//! This module contains the parts of a cell's [`Style`]:
//! - [`Font`] - Font settings
//! - [`Fill`] - Background fill
//! - [`Border`] - Cell borders
//! - [`Alignment`] - Text alignment
//!
//! Values are kept as the text and numbers found in the workbook; resolving
//! them against style registries happens above this crate.

mod alignment;
mod border;
mod fill;
mod font;

pub use alignment::Alignment;
pub use border::Border;
pub use fill::Fill;
pub use font::Font;

/// Complete cell style
///
/// The `apply_*` flags record whether each part overrides the workbook
/// default for the cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Border settings
    pub border: Border,
    /// Fill/background settings
    pub fill: Fill,
    /// Font settings
    pub font: Font,
    /// Text alignment
    pub alignment: Alignment,
    /// Border is applied
    pub apply_border: bool,
    /// Fill is applied
    pub apply_fill: bool,
    /// Font is applied
    pub apply_font: bool,
    /// Alignment is applied
    pub apply_alignment: bool,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border and mark it applied
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self.apply_border = true;
        self
    }

    /// Set the fill and mark it applied
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self.apply_fill = true;
        self
    }

    /// Set the font and mark it applied
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self.apply_font = true;
        self
    }

    /// Set the alignment and mark it applied
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self.apply_alignment = true;
        self
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }
}
