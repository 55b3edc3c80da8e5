//! Multi-line statement accumulation.
//!
//! UI calls are often wrapped across lines:
//!
//! ```lua
//! LrDialogs.message(
//!     "Delete this album?", "Are you sure?")
//! ```
//!
//! The accumulator is a two-state machine (`Idle`, `Accumulating`) that joins
//! such lines into one [`Statement`] while keeping every physical line number,
//! so literals found in the joined text can be attributed to the line they
//! were written on.

use crate::utils::{ends_with_concat, paren_delta};

/// One physical source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalLine {
    pub line_num: usize,
    pub raw: String,
}

/// A complete logical statement ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub pattern_name: &'static str,
    pub lines: Vec<PhysicalLine>,
}

impl Statement {
    /// A statement made of a single line.
    pub fn single(pattern_name: &'static str, line_num: usize, raw: &str) -> Self {
        Self {
            pattern_name,
            lines: vec![PhysicalLine {
                line_num,
                raw: raw.to_string(),
            }],
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }

    /// Trimmed lines joined with a single space.
    pub fn combined_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.raw.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Physical line holding `literal`.
    ///
    /// Looks for the quoted literal first, then for the bare text, and falls
    /// back to the first line of the statement.
    pub fn locate(&self, literal: &str) -> &PhysicalLine {
        let quoted = format!("\"{}\"", literal);
        self.lines
            .iter()
            .find(|l| l.raw.contains(&quoted))
            .or_else(|| self.lines.iter().find(|l| l.raw.contains(literal)))
            .unwrap_or(&self.lines[0])
    }
}

/// In-progress statement state.
#[derive(Debug, Clone)]
pub struct MultiLineContext {
    pattern_name: &'static str,
    lines: Vec<PhysicalLine>,
    paren_balance: i32,
    trailing_concat: bool,
}

impl MultiLineContext {
    fn push(&mut self, line_num: usize, raw: &str) {
        self.paren_balance += paren_delta(raw);
        self.trailing_concat = ends_with_concat(raw);
        self.lines.push(PhysicalLine {
            line_num,
            raw: raw.to_string(),
        });
    }

    fn is_complete(&self) -> bool {
        self.paren_balance <= 0 && !self.trailing_concat
    }

    fn into_statement(self) -> Statement {
        Statement {
            pattern_name: self.pattern_name,
            lines: self.lines,
        }
    }
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Idle,
    Accumulating(MultiLineContext),
}

#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    state: State,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a line leaves a statement open: more `(` than `)`, or a
    /// trailing `..`.
    pub fn opens_statement(line: &str) -> bool {
        paren_delta(line) > 0 || ends_with_concat(line)
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, State::Accumulating(_))
    }

    /// `Idle -> Accumulating`, seeded with the triggering line.
    ///
    /// Only called while idle; callers feed continuation lines to an open
    /// statement instead.
    pub fn begin(&mut self, pattern_name: &'static str, line_num: usize, raw: &str) {
        debug_assert!(!self.is_accumulating());
        let mut ctx = MultiLineContext {
            pattern_name,
            lines: Vec::new(),
            paren_balance: 0,
            trailing_concat: false,
        };
        ctx.push(line_num, raw);
        self.state = State::Accumulating(ctx);
    }

    /// Add a continuation line. Returns the statement once it is complete
    /// (`Accumulating -> Idle`). Does nothing while idle.
    pub fn feed(&mut self, line_num: usize, raw: &str) -> Option<Statement> {
        let State::Accumulating(ctx) = &mut self.state else {
            return None;
        };
        ctx.push(line_num, raw);
        if ctx.is_complete() {
            self.take()
        } else {
            None
        }
    }

    /// Forced closure at end of file.
    pub fn finish(&mut self) -> Option<Statement> {
        self.take()
    }

    fn take(&mut self) -> Option<Statement> {
        match std::mem::take(&mut self.state) {
            State::Accumulating(ctx) => Some(ctx.into_statement()),
            State::Idle => None,
        }
    }
}
