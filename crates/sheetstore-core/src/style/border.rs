//! Border style record

/// Border sides and their colors
///
/// Each side holds the border line style name (e.g. `"thin"`) and each color
/// holds the color text as found in the workbook (e.g. `"FF000000"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// Left line style
    pub left: String,
    /// Left line color
    pub left_color: String,
    /// Right line style
    pub right: String,
    /// Right line color
    pub right_color: String,
    /// Top line style
    pub top: String,
    /// Top line color
    pub top_color: String,
    /// Bottom line style
    pub bottom: String,
    /// Bottom line color
    pub bottom_color: String,
}

impl Border {
    /// Create a border with no sides set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four sides to the same line style and color
    pub fn all<S: Into<String>, C: Into<String>>(style: S, color: C) -> Self {
        let style = style.into();
        let color = color.into();
        Self {
            left: style.clone(),
            left_color: color.clone(),
            right: style.clone(),
            right_color: color.clone(),
            top: style.clone(),
            top_color: color.clone(),
            bottom: style,
            bottom_color: color,
        }
    }

    /// Check if no side has a line style
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
            && self.right.is_empty()
            && self.top.is_empty()
            && self.bottom.is_empty()
    }
}
