use std::{error::Error, fmt::Display};

use serde::{Deserialize, Serialize};

/// A positioned, non-fatal finding: an unrecognized character reported by
/// the scanner, or one edit applied by the repair engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {line}, column {column}] {message}",
            line = self.line,
            column = self.column,
            message = self.message
        )
    }
}

impl Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(3, 14, "Unexpected character: @");
        assert_eq!(
            "[line 3, column 14] Unexpected character: @",
            diagnostic.to_string()
        );
    }
}
