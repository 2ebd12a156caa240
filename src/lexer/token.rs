use serde::{Deserialize, Serialize};

pub type Position = (usize, usize);

/// Keywords of the declaration sub-language. The scanner builds its keyword
/// rules from this set; shells may use it for highlighting.
pub const KEYWORDS: [&str; 3] = ["const", "constexpr", "int"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Const,
    Constexpr,
    Int,
    Variable,
    Equal,
    Plus,
    Minus,
    Value,
    Semicolon,
    Invalid,
}

impl TokenKind {
    /// Canonical lexeme carried by tokens the repair engine synthesizes.
    pub fn default_value(&self) -> &'static str {
        match self {
            TokenKind::Const => "const",
            TokenKind::Constexpr => "constexpr",
            TokenKind::Int => "int",
            TokenKind::Variable => "variable_name",
            TokenKind::Equal => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Value => "number",
            TokenKind::Semicolon => ";",
            TokenKind::Invalid => "?",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Const => "CONST",
            TokenKind::Constexpr => "CONSTEXPR",
            TokenKind::Int => "INT",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Equal => "EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Value => "VALUE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Invalid => "INVALID",
        };
        f.write_str(name)
    }
}

/// A positioned lexical unit. `value` is the exact source substring for
/// scanned tokens and the kind's canonical lexeme for synthesized ones;
/// `line` and `column` are 1-based, with columns counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// A token invented by the repair engine, carrying the kind's canonical
    /// lexeme and the position of its anchor in the source.
    pub fn synthesized(kind: TokenKind, (line, column): Position) -> Self {
        Self {
            kind,
            value: kind.default_value().to_string(),
            line,
            column,
        }
    }

    pub fn position(&self) -> Position {
        (self.line, self.column)
    }

    /// Column of the last character of this token.
    pub fn end_column(&self) -> usize {
        self.column + self.value.chars().count().max(1) - 1
    }
}
