use crate::{
    lexer::{Token, TokenKind},
    machine::{self, State},
};

use super::Edit;

/// A candidate walk of the state machine over a (possibly edited) copy of
/// the token stream, carrying its edit log. Branches are derived, never
/// mutated in place: every derivation copies its parent and records the
/// edit that distinguishes them.
///
/// Invariant: `tokens[cursor..]` is always a suffix of the stream the root
/// branch was built from. Every derivation touches indices at or before
/// the cursor only.
#[derive(Debug, Clone)]
pub struct Branch {
    pub tokens: Vec<Token>,
    pub cursor: usize,
    pub state: State,
    pub edits: Vec<Edit>,
}

impl Branch {
    pub fn root(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            state: State::Start,
            edits: vec![],
        }
    }

    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    pub fn accepting(&self) -> bool {
        self.at_end() && machine::accepting(self.state)
    }

    /// Count of unconsumed tokens. Together with the state this identifies
    /// the branch's entire future (see the suffix invariant above).
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// Consume the current token along its transition. `None` when the
    /// stream is exhausted or the machine rejects the token.
    pub fn advance(&self) -> Option<Branch> {
        let token = self.tokens.get(self.cursor)?;
        let state = machine::step(self.state, token.kind)?;

        let mut next = self.clone();
        next.cursor += 1;
        next.state = state;
        Some(next)
    }

    /// Drop the current token; cursor and state stay put.
    pub fn delete(&self) -> Option<Branch> {
        if self.at_end() {
            return None;
        }

        let mut next = self.clone();
        let old = next.tokens.remove(self.cursor);
        next.edits.push(Edit::Delete {
            index: self.cursor,
            token: old,
        });
        Some(next)
    }

    /// Substitute the current token with a synthesized `kind` at the same
    /// position and walk over it.
    pub fn replace(&self, kind: TokenKind) -> Option<Branch> {
        let old = self.tokens.get(self.cursor)?.clone();
        let state = machine::step(self.state, kind)?;

        let mut next = self.clone();
        let new = Token::synthesized(kind, old.position());
        next.tokens[self.cursor] = new.clone();
        next.edits.push(Edit::Replace {
            index: self.cursor,
            old,
            new,
        });
        next.cursor += 1;
        next.state = state;
        Some(next)
    }

    /// Insert a synthesized `kind` before the current token and walk over
    /// it; the cursor lands back on the token that anchored the insert.
    pub fn insert(&self, kind: TokenKind) -> Option<Branch> {
        let anchor = self.tokens.get(self.cursor)?.position();
        let state = machine::step(self.state, kind)?;

        let mut next = self.clone();
        let new = Token::synthesized(kind, anchor);
        next.tokens.insert(self.cursor, new.clone());
        next.edits.push(Edit::Insert {
            index: self.cursor,
            token: new,
        });
        next.cursor += 1;
        next.state = state;
        Some(next)
    }

    /// Append a synthesized `kind` after the last token, for walks that ran
    /// out of stream before reaching an accepting state. The anchor sits
    /// one column past the last token, or at (1, 1) for an empty stream.
    pub fn append(&self, kind: TokenKind) -> Option<Branch> {
        let state = machine::step(self.state, kind)?;

        let anchor = self.tokens.last().map_or((1, 1), |last| {
            (last.line, last.column + last.value.chars().count())
        });

        let mut next = self.clone();
        let new = Token::synthesized(kind, anchor);
        next.tokens.push(new.clone());
        next.edits.push(Edit::Insert {
            index: self.cursor,
            token: new,
        });
        next.cursor += 1;
        next.state = state;
        Some(next)
    }
}
