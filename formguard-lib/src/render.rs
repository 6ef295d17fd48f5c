use std::fmt;

/// Style classification applied to a field's input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// No validation styling (field not yet touched).
    #[default]
    None,
    Valid,
    Invalid,
}

impl StyleClass {
    /// The class name as written to the rendering surface.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single field should look like right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub style: StyleClass,
    /// Error text; empty when no error is shown.
    pub error: String,
}

impl RenderState {
    /// Blank state: no styling, no error.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn valid() -> Self {
        Self {
            style: StyleClass::Valid,
            error: String::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            style: StyleClass::Invalid,
            error: error.into(),
        }
    }

    /// The error text as an option, `None` when blank.
    pub fn error(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }
}
