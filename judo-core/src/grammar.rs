//! Grammar assembly and public entry points.
//!
//! Wires the leaves, combinators, and reducers into the document grammar:
//!
//! ```text
//! value  := string | number | object | array
//! pair   := string ":" value
//! object := "{" [ pair ("," pair)* ] "}"
//! array  := "[" [ value ("," value)* ] "]"
//! ```
//!
//! The recursive appearances of `value` inside `pair` and the array element
//! list go through a `LazySlot`, bound once the `value` choice exists. The
//! finished graph is immutable; one `Grammar` serves any number of
//! sequential parses.

use std::rc::Rc;

use thiserror::Error;

use crate::combinator::{Choice, LazySlot, Optional, Repetition, Sequence};
use crate::compose::{ComposeArray, ComposeObject};
use crate::leaf::{Char, Number, StringLiteral};
use crate::state::{ParseState, ParserRef};
use crate::value::Value;

/// Why a document failed to parse.
///
/// The combinator engine reports failure as a bare non-match, with no
/// position or expected-token information; these variants only distinguish
/// "nothing matched" from "something matched but input was left over".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not start with a document the grammar accepts.
    #[error("input does not match the document grammar")]
    Unmatched,

    /// A document matched but unconsumed input remains after it.
    #[error("unconsumed input after the document")]
    TrailingInput,
}

fn ch(byte: u8) -> ParserRef {
    Rc::new(Char::new(byte))
}

fn seq(children: Vec<ParserRef>) -> ParserRef {
    Rc::new(Sequence::new(children))
}

fn many(child: ParserRef) -> ParserRef {
    Rc::new(Repetition::new(child))
}

fn opt(child: ParserRef) -> ParserRef {
    Rc::new(Optional::new(child))
}

/// The assembled document grammar: build once, parse many.
///
/// # Example
///
/// ```
/// use judo_core::Grammar;
///
/// let grammar = Grammar::new();
/// let value = grammar.parse("{\"name\": \"judo\", \"tags\": [1, 2]}").unwrap();
///
/// assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("judo"));
/// assert_eq!(value.get("tags").and_then(|v| v.len()), Some(2));
/// ```
pub struct Grammar {
    value: ParserRef,
}

impl Grammar {
    /// Build the combinator graph.
    pub fn new() -> Self {
        let value_slot = LazySlot::new();

        // pair := string ":" value
        let pair = seq(vec![Rc::new(StringLiteral), ch(b':'), value_slot.parser()]);
        let pair_tail = seq(vec![ch(b','), Rc::clone(&pair)]);
        let pairs = opt(seq(vec![pair, many(pair_tail)]));
        let object: ParserRef =
            Rc::new(ComposeObject::new(seq(vec![ch(b'{'), pairs, ch(b'}')])));

        // array element list, with the same tail shape as pairs
        let element_tail = seq(vec![ch(b','), value_slot.parser()]);
        let elements = opt(seq(vec![value_slot.parser(), many(element_tail)]));
        let array: ParserRef =
            Rc::new(ComposeArray::new(seq(vec![ch(b'['), elements, ch(b']')])));

        let value: ParserRef = Rc::new(Choice::new(vec![
            Rc::new(StringLiteral),
            Rc::new(Number),
            object,
            array,
        ]));
        value_slot.bind(&value);

        Self { value }
    }

    /// Handle to the `value` production, for driving a [`ParseState`] by
    /// hand or embedding the document grammar in a larger one. The handle
    /// keeps the graph alive independently of the `Grammar` it came from.
    pub fn parser(&self) -> ParserRef {
        Rc::clone(&self.value)
    }

    /// Parse one document.
    ///
    /// Whitespace (space and newline) around the document is tolerated; the
    /// document itself must span the rest of the input, otherwise
    /// [`ParseError::TrailingInput`] is returned.
    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let mut state = ParseState::new(input);
        state.skip_whitespace();
        if !self.value.parse(&mut state) {
            return Err(ParseError::Unmatched);
        }
        state.skip_whitespace();
        if !state.at_end() {
            return Err(ParseError::TrailingInput);
        }
        state.into_value().ok_or(ParseError::Unmatched)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience: build a grammar and parse a single document.
///
/// Callers parsing many documents should build one [`Grammar`] and reuse it.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Grammar::new().parse(input)
}
