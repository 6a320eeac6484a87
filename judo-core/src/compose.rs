//! Structural reducers: fold flat stack output into one value.
//!
//! A reducer wraps a child combinator, remembers how deep the stack was
//! before the child ran, and collapses everything the child pushed into a
//! single object or array. Net effect on the stack: n pushes become one.

use indexmap::IndexMap;

use crate::state::{ParseState, Parser, ParserRef};
use crate::value::Value;

/// Folds the child's pushes into one `Value::Object`.
///
/// The child is expected to push alternating key/value couples, key first,
/// in parse order - the shape the pair production produces. Entries land in
/// the map in parse order; a repeated key keeps its first position and takes
/// the last value. A non-string in key position, or a dangling key without a
/// value, does not compose: the attempt fails with the state rewound.
pub struct ComposeObject {
    child: ParserRef,
}

impl ComposeObject {
    pub fn new(child: ParserRef) -> Self {
        Self { child }
    }
}

impl Parser for ComposeObject {
    fn parse(&self, state: &mut ParseState) -> bool {
        let checkpoint = state.checkpoint();
        if !self.child.parse(state) {
            return false;
        }

        let flat = state.drain_from(checkpoint.depth());
        let mut entries = IndexMap::with_capacity(flat.len() / 2);
        let mut flat = flat.into_iter();
        while let Some(key) = flat.next() {
            let (Value::String(key), Some(value)) = (key, flat.next()) else {
                state.rewind(checkpoint);
                return false;
            };
            entries.insert(key, value);
        }

        state.push(Value::Object(entries));
        true
    }
}

/// Folds the child's pushes into one `Value::Array`.
///
/// Elements keep parse order: the stack tail is drained oldest-first, so
/// the first value pushed becomes the first element.
pub struct ComposeArray {
    child: ParserRef,
}

impl ComposeArray {
    pub fn new(child: ParserRef) -> Self {
        Self { child }
    }
}

impl Parser for ComposeArray {
    fn parse(&self, state: &mut ParseState) -> bool {
        let depth = state.depth();
        if !self.child.parse(state) {
            return false;
        }
        let items = state.drain_from(depth);
        state.push(Value::Array(items));
        true
    }
}
