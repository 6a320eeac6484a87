//! Control-flow combinators over child parsers.
//!
//! Each combinator is cursor- and stack-transactional: it snapshots a
//! checkpoint before an attempt and rewinds it if the attempt fails, so a
//! failed subtree leaves no trace. `Lazy` breaks construction-order cycles
//! for recursive productions; everything else is plain sequencing, choice,
//! repetition, and optionality.

use std::rc::{Rc, Weak};

use once_cell::unsync::OnceCell;

use crate::state::{ParseState, Parser, ParserRef};

/// Runs its children in order; all must match.
///
/// Fails on the first child failure with the state rewound to entry. On
/// success the cursor rests wherever the last child left it.
pub struct Sequence {
    children: Vec<ParserRef>,
}

impl Sequence {
    pub fn new(children: Vec<ParserRef>) -> Self {
        Self { children }
    }
}

impl Parser for Sequence {
    fn parse(&self, state: &mut ParseState) -> bool {
        let checkpoint = state.checkpoint();
        for child in &self.children {
            if !child.parse(state) {
                state.rewind(checkpoint);
                return false;
            }
        }
        true
    }
}

/// Tries its alternatives in order from the same entry state; the first
/// match wins and its effects stand.
///
/// The state is rewound between alternatives, so a partial match by an
/// earlier alternative cannot bleed into a later one. Fails, rewound, when
/// every alternative fails.
pub struct Choice {
    alternatives: Vec<ParserRef>,
}

impl Choice {
    pub fn new(alternatives: Vec<ParserRef>) -> Self {
        Self { alternatives }
    }
}

impl Parser for Choice {
    fn parse(&self, state: &mut ParseState) -> bool {
        let checkpoint = state.checkpoint();
        for alternative in &self.alternatives {
            if alternative.parse(state) {
                return true;
            }
            state.rewind(checkpoint);
        }
        false
    }
}

/// Runs its child until it fails; zero matches is still success.
///
/// The final failed attempt is rewound. The child must consume input when
/// it succeeds, otherwise repetition never terminates.
pub struct Repetition {
    child: ParserRef,
}

impl Repetition {
    pub fn new(child: ParserRef) -> Self {
        Self { child }
    }
}

impl Parser for Repetition {
    fn parse(&self, state: &mut ParseState) -> bool {
        loop {
            let checkpoint = state.checkpoint();
            if !self.child.parse(state) {
                state.rewind(checkpoint);
                return true;
            }
        }
    }
}

/// Runs its child at most once and succeeds either way.
pub struct Optional {
    child: ParserRef,
}

impl Optional {
    pub fn new(child: ParserRef) -> Self {
        Self { child }
    }
}

impl Parser for Optional {
    fn parse(&self, state: &mut ParseState) -> bool {
        let checkpoint = state.checkpoint();
        if !self.child.parse(state) {
            state.rewind(checkpoint);
        }
        true
    }
}

/// Binding cell for a parser that does not exist yet.
///
/// Recursive productions are a construction-order cycle, not a runtime one:
/// the value production appears inside the object and array productions that
/// appear inside the value production. A `LazySlot` is created first, hands
/// out [`Lazy`] parsers wherever the recursive reference is needed, and is
/// bound to the real parser once the full graph exists.
///
/// The slot holds a weak reference: the grammar root owns its parsers, lazy
/// edges only look them up, and the graph stays acyclic at the ownership
/// level.
pub struct LazySlot {
    cell: Rc<OnceCell<Weak<dyn Parser>>>,
}

impl LazySlot {
    pub fn new() -> Self {
        Self { cell: Rc::new(OnceCell::new()) }
    }

    /// A parser that forwards to whatever this slot gets bound to.
    pub fn parser(&self) -> ParserRef {
        Rc::new(Lazy { cell: Rc::clone(&self.cell) })
    }

    /// Bind the slot to its target. The first bind wins; later binds are
    /// ignored.
    pub fn bind(&self, target: &ParserRef) {
        let _ = self.cell.set(Rc::downgrade(target));
    }
}

impl Default for LazySlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Deferred reference to a parser resolved through its [`LazySlot`] at
/// parse time.
///
/// An unbound slot, or one whose target has been dropped, matches nothing.
pub struct Lazy {
    cell: Rc<OnceCell<Weak<dyn Parser>>>,
}

impl Parser for Lazy {
    fn parse(&self, state: &mut ParseState) -> bool {
        match self.cell.get().and_then(Weak::upgrade) {
            Some(target) => target.parse(state),
            None => false,
        }
    }
}
