use crate::{diagnostics::Diagnostic, lexer::Token};

/// One applied change to a token stream. `index` refers to the stream as
/// it was at the moment of application, so replaying a log front to back
/// reproduces the repaired stream exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { index: usize, token: Token },
    Delete { index: usize, token: Token },
    Replace { index: usize, old: Token, new: Token },
}

impl Edit {
    /// Replay this edit against `tokens`.
    pub fn apply(&self, tokens: &mut Vec<Token>) {
        match self {
            Edit::Insert { index, token } => tokens.insert(*index, token.clone()),
            Edit::Delete { index, .. } => {
                tokens.remove(*index);
            }
            Edit::Replace { index, new, .. } => tokens[*index] = new.clone(),
        }
    }

    /// What the user has to change, anchored at the affected token.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Edit::Delete { token, .. } => Diagnostic::new(
                token.line,
                token.column,
                format!("Remove invalid token: '{}'", token.value),
            ),
            Edit::Replace { old, new, .. } => Diagnostic::new(
                old.line,
                old.column,
                format!("Replace '{}' with '{}'", old.value, new.value),
            ),
            Edit::Insert { token, .. } => Diagnostic::new(
                token.line,
                token.column,
                format!("Insert missing token: '{}'", token.value),
            ),
        }
    }
}
