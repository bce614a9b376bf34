//! Data validation record
//!
//! A [`DataValidation`] restricts what may be entered in a cell and holds the
//! prompt and error texts shown to the user. The optional texts distinguish
//! "not set" (`None`) from "set to empty" (`Some(String::new())`).
//!
//! ## Example
//!
//! ```rust
//! use sheetstore_core::DataValidation;
//!
//! let validation = DataValidation::list("\"Yes,No,Maybe\"")
//!     .with_range("A1:A10")
//!     .with_error_message("Invalid value", "Choose Yes, No or Maybe");
//!
//! assert_eq!(validation.validation_type, "list");
//! assert_eq!(validation.error_title.as_deref(), Some("Invalid value"));
//! assert!(validation.prompt.is_none());
//! ```

/// Data validation rule for a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataValidation {
    /// Empty cells pass the rule
    pub allow_blank: bool,
    /// Display the prompt while the cell is selected
    pub show_input_message: bool,
    /// Display the error alert on rejected input
    pub show_error_message: bool,
    /// Error alert style (`"stop"`, `"warning"`, `"information"`)
    pub error_style: Option<String>,
    /// Heading of the error alert
    pub error_title: Option<String>,
    /// Comparison operator (e.g. `"between"`)
    pub operator: String,
    /// Body of the error alert
    pub error: Option<String>,
    /// Heading of the prompt
    pub prompt_title: Option<String>,
    /// Body of the prompt
    pub prompt: Option<String>,
    /// Validation type (e.g. `"list"`, `"whole"`)
    pub validation_type: String,
    /// Cell range reference the rule applies to
    pub sqref: String,
    /// First formula or list source
    pub formula1: String,
    /// Second formula for two-operand operators
    pub formula2: String,
}

impl DataValidation {
    /// Empty rule; every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule accepting only entries from `source`
    ///
    /// `source` is either a quoted comma-separated list of values or a range
    /// reference.
    pub fn list(source: impl Into<String>) -> Self {
        Self {
            validation_type: "list".to_string(),
            allow_blank: true,
            formula1: source.into(),
            ..Self::default()
        }
    }

    /// Create a rule of `validation_type` comparing with `operator`
    pub fn compare(
        validation_type: impl Into<String>,
        operator: impl Into<String>,
        formula1: impl Into<String>,
    ) -> Self {
        Self {
            validation_type: validation_type.into(),
            operator: operator.into(),
            formula1: formula1.into(),
            ..Self::default()
        }
    }

    /// Set the range reference
    pub fn with_range(mut self, sqref: impl Into<String>) -> Self {
        self.sqref = sqref.into();
        self
    }

    /// Set the second formula
    pub fn with_formula2(mut self, formula2: impl Into<String>) -> Self {
        self.formula2 = formula2.into();
        self
    }

    pub fn with_allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Set and enable the prompt
    pub fn with_input_message(
        mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.show_input_message = true;
        self.prompt_title = Some(title.into());
        self.prompt = Some(message.into());
        self
    }

    /// Set and enable the error alert
    pub fn with_error_message(
        mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.show_error_message = true;
        self.error_title = Some(title.into());
        self.error = Some(message.into());
        self
    }

    /// Set the error alert style
    pub fn with_error_style(mut self, style: impl Into<String>) -> Self {
        self.error_style = Some(style.into());
        self
    }
}
