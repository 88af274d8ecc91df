//! Stylesheet loading errors.

/// Error returned when a stylesheet cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// The document is not valid YAML/JSON or has the wrong shape
    Parse { message: String },
    /// A color name that is neither a known name nor a decimal code
    UnknownColor { style: String, color: String },
    /// A known color placed in the wrong field, e.g. `fg: bg_red`
    WrongGroup {
        style: String,
        field: String,
        color: String,
    },
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Parse { message } => {
                write!(f, "invalid stylesheet: {}", message)
            }
            StylesheetError::UnknownColor { style, color } => {
                write!(f, "style '{}' uses unknown color '{}'", style, color)
            }
            StylesheetError::WrongGroup {
                style,
                field,
                color,
            } => {
                write!(
                    f,
                    "style '{}' sets '{}' to '{}', which does not belong there",
                    style, field, color
                )
            }
        }
    }
}

impl std::error::Error for StylesheetError {}

impl From<serde_yaml::Error> for StylesheetError {
    fn from(err: serde_yaml::Error) -> Self {
        StylesheetError::Parse {
            message: err.to_string(),
        }
    }
}
