//! JUDO Core Parser
//!
//! Backtracking combinator parser for JUDO (JSON-flavored Uniform Data
//! Objects): double-quoted escape-free strings, unsigned integers, ordered
//! objects, and arrays. The combinator engine is the crate; the document
//! grammar is a thin consumer wired on top of it.
//!
//! # Architecture
//!
//! - **state.rs** - ParseState, Checkpoint, the `Parser` trait
//! - **leaf.rs** - terminal parsers: Char, StringLiteral, Number
//! - **combinator.rs** - Sequence, Choice, Repetition, Optional, Lazy
//! - **compose.rs** - ComposeObject / ComposeArray stack reducers
//! - **value.rs** - parsed value types and the canonical writer
//! - **grammar.rs** - document grammar assembly, public entry points
//!
//! # Example
//!
//! ```
//! let value = judo_core::parse("{\"a\": [1, {\"b\": \"c\"}]}").unwrap();
//! assert_eq!(value.get("a").and_then(|a| a.len()), Some(2));
//! ```

pub mod combinator;
pub mod compose;
pub mod grammar;
pub mod leaf;
pub mod state;
pub mod value;

pub use combinator::{Choice, Lazy, LazySlot, Optional, Repetition, Sequence};
pub use compose::{ComposeArray, ComposeObject};
pub use grammar::{parse, Grammar, ParseError};
pub use leaf::{Char, Number, StringLiteral};
pub use state::{Checkpoint, ParseState, Parser, ParserRef};
pub use value::Value;
