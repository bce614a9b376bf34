//! Hyperlink record

/// Hyperlink attached to a cell
///
/// Always present on a [`crate::Cell`]; a cell without a link carries three
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlink {
    /// Text shown in the cell
    pub display_string: String,
    /// Link target
    pub link: String,
    /// Tooltip text
    pub tooltip: String,
}

impl Hyperlink {
    /// Create a hyperlink
    pub fn new<D, L, T>(display_string: D, link: L, tooltip: T) -> Self
    where
        D: Into<String>,
        L: Into<String>,
        T: Into<String>,
    {
        Self {
            display_string: display_string.into(),
            link: link.into(),
            tooltip: tooltip.into(),
        }
    }

    /// Check if the link has no target
    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }
}
