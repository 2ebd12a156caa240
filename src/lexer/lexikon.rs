use lazy_static::lazy_static;
use regex::Regex;

use super::{TokenKind, KEYWORDS};

/// One scan rule: a pattern anchored at the cursor and the kind a match
/// produces. Keyword rules additionally require a non-alphanumeric
/// character (or end of input) right after the match.
struct Rule {
    pattern: Regex,
    kind: TokenKind,
    keyword: bool,
}

macro_rules! rule {
    ($rules:ident, $kind:ident, $pattern:expr) => {
        $rules.push(Rule {
            pattern: Regex::new($pattern).unwrap(),
            kind: TokenKind::$kind,
            keyword: false,
        });
    };
}

macro_rules! keyword {
    ($rules:ident, $kind:ident, $lexeme:expr) => {
        $rules.push(Rule {
            pattern: Regex::new(&format!("^{}", $lexeme)).unwrap(),
            kind: TokenKind::$kind,
            keyword: true,
        });
    };
}

/// Priority-ordered rule table for the scanner. Rules are tried in
/// declaration order and the first committing match wins; a keyword rule
/// that fails its boundary check falls through to the identifier rule, so
/// `constx` scans as one identifier.
pub struct Lexikon {
    rules: Vec<Rule>,
}

impl Lexikon {
    pub fn new() -> Self {
        let mut rules = vec![];

        keyword!(rules, Const, KEYWORDS[0]);
        keyword!(rules, Constexpr, KEYWORDS[1]);
        keyword!(rules, Int, KEYWORDS[2]);
        rule!(rules, Equal, "^=");
        rule!(rules, Plus, r"^\+");
        rule!(rules, Minus, "^-");
        rule!(rules, Semicolon, "^;");
        rule!(rules, Variable, "^[a-zA-Z][a-zA-Z0-9]*");
        rule!(rules, Value, "^[0-9]+");

        Self { rules }
    }

    /// First rule committing at the start of `rest`, as the matched byte
    /// length and the produced kind. `None` means no rule applies and the
    /// leading character is unrecognized.
    pub fn find_match(&self, rest: &str) -> Option<(usize, TokenKind)> {
        for rule in &self.rules {
            let Some(found) = rule.pattern.find(rest) else {
                continue;
            };

            if rule.keyword {
                let boundary = rest[found.end()..]
                    .chars()
                    .next()
                    .map_or(true, |c| !c.is_alphanumeric());
                if !boundary {
                    continue;
                }
            }

            return Some((found.end(), rule.kind));
        }

        None
    }
}

impl Default for Lexikon {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    pub static ref LEXIKON: Lexikon = Lexikon::new();
}
