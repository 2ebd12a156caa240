//! Scanner for the declaration sub-language. Walks the source once,
//! skipping whitespace and committing the highest-priority rule match at
//! each step; unrecognized characters become diagnostics, never tokens,
//! and scanning always consumes the whole input.

mod lexikon;
mod linemap;
mod token;

pub use lexikon::*;
pub use linemap::*;
pub use token::*;

use log::trace;

use crate::diagnostics::Diagnostic;

pub struct Lexer<'a> {
    input: &'a str,
    linemap: LineMap,
    tokens: Vec<Token>,
    errors: Vec<Diagnostic>,
    /// Byte offset of the cursor into `input`.
    pos: usize,
    /// Character offset of the cursor, kept in lockstep for the line map.
    chars: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            linemap: LineMap::new(input),
            tokens: vec![],
            errors: vec![],
            pos: 0,
            chars: 0,
        }
    }

    pub fn lex(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while self.pos < self.input.len() {
            self.eat_whitespace();
            if self.pos == self.input.len() {
                break;
            }

            let (line, column) = self.linemap.location(self.chars);
            let rest = &self.input[self.pos..];

            match LEXIKON.find_match(rest) {
                Some((len, kind)) => {
                    let value = &rest[..len];
                    trace!("scanned {kind} '{value}' at {line}:{column}");
                    self.tokens.push(Token::new(kind, value, line, column));
                    self.pos += len;
                    self.chars += value.chars().count();
                }
                None => {
                    let Some(c) = rest.chars().next() else {
                        break;
                    };
                    trace!("unrecognized character '{c}' at {line}:{column}");
                    self.errors.push(Diagnostic::new(
                        line,
                        column,
                        format!("Unexpected character: {c}"),
                    ));
                    self.pos += c.len_utf8();
                    self.chars += 1;
                }
            }
        }

        (self.tokens, self.errors)
    }

    fn eat_whitespace(&mut self) {
        while let Some(c) = self.input[self.pos..].chars().next() {
            if !c.is_whitespace() {
                return;
            }
            self.pos += c.len_utf8();
            self.chars += 1;
        }
    }
}
