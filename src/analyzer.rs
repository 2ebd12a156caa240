//! Facade over the scanner and the repair engine. Both operations are pure
//! functions of their inputs; shells call `analyze` and render the tokens
//! and diagnostics however they like.

use serde::{Deserialize, Serialize};

use crate::{
    diagnostics::Diagnostic,
    lexer::{Lexer, Token},
    repair::{Repairer, MAX_EDITS},
};

/// Result of running the full pipeline over a source text. `errors` holds
/// the scan errors in scan order followed by the repair edits in
/// application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub errors: Vec<Diagnostic>,
}

/// Scan `input` into positioned tokens plus scan errors.
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(input).lex()
}

/// Repair `tokens` against the declaration grammar with the default budget.
pub fn repair(tokens: Vec<Token>) -> (Vec<Token>, Vec<Diagnostic>) {
    Repairer::default().repair(tokens)
}

/// Scan and repair `input` with the default edit budget.
pub fn analyze(input: &str) -> Analysis {
    analyze_with_budget(input, MAX_EDITS)
}

/// Scan and repair `input`, capping the repair at `max_edits`.
pub fn analyze_with_budget(input: &str, max_edits: usize) -> Analysis {
    let (tokens, mut errors) = tokenize(input);
    let (tokens, edits) = Repairer::new(max_edits).repair(tokens);
    errors.extend(edits);

    Analysis { tokens, errors }
}

/// One row of the token table shells display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub kind: String,
    pub value: String,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            line: token.line,
            start_column: token.column,
            end_column: token.end_column(),
            kind: token.kind.to_string(),
            value: token.value.clone(),
        }
    }
}

pub fn token_rows(tokens: &[Token]) -> Vec<TokenRow> {
    tokens.iter().map(TokenRow::from).collect()
}
