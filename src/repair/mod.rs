//! Minimum-edit repair of a token stream against the declaration grammar.
//!
//! The engine runs a best-first search over branches: partial walks of the
//! state machine over edited copies of the stream. Edits cost one each and
//! consuming a matching token is free, so the first accepting branch popped
//! off the queue carries a minimal edit log.

mod branch;
mod edit;

pub use branch::*;
pub use edit::*;

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
};

use log::{debug, trace};

use crate::{
    diagnostics::Diagnostic,
    lexer::Token,
    machine::{self, State},
};

/// Hard cap on edits per repair attempt.
pub const MAX_EDITS: usize = 15;

/// Queue entry ordering: cheapest edit count first, FIFO between equals.
struct Queued {
    branch: Branch,
    seq: u64,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum, so compare the other way around
        (other.branch.edit_count(), other.seq).cmp(&(self.branch.edit_count(), self.seq))
    }
}

pub struct Repairer {
    max_edits: usize,
}

impl Default for Repairer {
    fn default() -> Self {
        Self {
            max_edits: MAX_EDITS,
        }
    }
}

impl Repairer {
    pub fn new(max_edits: usize) -> Self {
        Self { max_edits }
    }

    /// Minimum-edit repair of `tokens`. Returns the repaired stream plus
    /// one diagnostic per applied edit, in application order. When no
    /// accepting walk exists within the budget, the stream comes back
    /// unchanged with a single budget diagnostic at (0, 0).
    pub fn repair(&self, tokens: Vec<Token>) -> (Vec<Token>, Vec<Diagnostic>) {
        let original = tokens.clone();

        match self.search(tokens) {
            Some(branch) => {
                let diagnostics = branch.edits.iter().map(Edit::diagnostic).collect();
                (branch.tokens, diagnostics)
            }
            None => {
                debug!("no accepting walk within {} edit(s)", self.max_edits);
                let budget =
                    Diagnostic::new(0, 0, format!("Edit budget exceeded ({})", self.max_edits));
                (original, vec![budget])
            }
        }
    }

    /// Best-first search for the cheapest accepting branch.
    fn search(&self, tokens: Vec<Token>) -> Option<Branch> {
        let mut queue = BinaryHeap::new();
        let mut visited: HashSet<(usize, State)> = HashSet::new();
        let mut seq = 0u64;

        queue.push(Queued {
            branch: Branch::root(tokens),
            seq,
        });

        let mut push = |queue: &mut BinaryHeap<Queued>, branch: Branch| {
            seq += 1;
            queue.push(Queued { branch, seq });
        };

        while let Some(Queued { branch, .. }) = queue.pop() {
            // branches agreeing on (remaining, state) share their entire
            // future; the cheapest reaches here first and dominates
            if !visited.insert((branch.remaining(), branch.state)) {
                continue;
            }

            debug!(
                "exploring branch: {:?}, {} token(s) left, {} edit(s)",
                branch.state,
                branch.remaining(),
                branch.edit_count()
            );

            if branch.at_end() {
                if branch.accepting() {
                    debug!("accepted with {} edit(s)", branch.edit_count());
                    return Some(branch);
                }

                if branch.edit_count() < self.max_edits {
                    for &kind in machine::expected(branch.state) {
                        if let Some(child) = branch.append(kind) {
                            trace!("appending synthesized {kind}");
                            push(&mut queue, child);
                        }
                    }
                }
                continue;
            }

            if let Some(child) = branch.advance() {
                trace!("consuming {} for free", branch.tokens[branch.cursor].kind);
                push(&mut queue, child);
                continue;
            }

            if branch.edit_count() >= self.max_edits {
                continue;
            }

            if let Some(child) = branch.delete() {
                trace!("deleting {}", branch.tokens[branch.cursor].kind);
                push(&mut queue, child);
            }
            for &kind in machine::expected(branch.state) {
                if let Some(child) = branch.replace(kind) {
                    trace!("replacing {} with {kind}", branch.tokens[branch.cursor].kind);
                    push(&mut queue, child);
                }
                if let Some(child) = branch.insert(kind) {
                    trace!("inserting {kind} before {}", branch.tokens[branch.cursor].kind);
                    push(&mut queue, child);
                }
            }
        }

        None
    }
}
