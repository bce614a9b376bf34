//! Text alignment record

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal alignment name (e.g. `"left"`, `"center"`)
    pub horizontal: String,
    /// Indent level
    pub indent: i64,
    /// Shrink to fit
    pub shrink_to_fit: bool,
    /// Text rotation in degrees (255 for vertical text)
    pub text_rotation: i64,
    /// Vertical alignment name (e.g. `"top"`, `"bottom"`)
    pub vertical: String,
    /// Wrap text
    pub wrap_text: bool,
}

impl Alignment {
    /// Create a new default alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal<S: Into<String>>(mut self, align: S) -> Self {
        self.horizontal = align.into();
        self
    }

    /// Set vertical alignment
    pub fn with_vertical<S: Into<String>>(mut self, align: S) -> Self {
        self.vertical = align.into();
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: i64) -> Self {
        self.indent = indent;
        self
    }

    /// Set rotation angle
    pub fn with_rotation(mut self, degrees: i64) -> Self {
        self.text_rotation = degrees;
        self
    }
}
