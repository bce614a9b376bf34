//! Fill/background style record

/// Cell background fill
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// Pattern name (e.g. `"solid"`, `"none"`)
    pub pattern_type: String,
    /// Background color
    pub bg_color: String,
    /// Foreground color
    pub fg_color: String,
}

impl Fill {
    /// Create a fill from its pattern and colors
    pub fn new<P, B, F>(pattern_type: P, bg_color: B, fg_color: F) -> Self
    where
        P: Into<String>,
        B: Into<String>,
        F: Into<String>,
    {
        Self {
            pattern_type: pattern_type.into(),
            bg_color: bg_color.into(),
            fg_color: fg_color.into(),
        }
    }

    /// Solid fill in a single color
    pub fn solid<C: Into<String>>(color: C) -> Self {
        Self::new("solid", "", color)
    }
}
