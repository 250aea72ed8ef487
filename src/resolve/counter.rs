//! LaTeX-style counters with subcounters.
//!
//! Counters live in an arena owned by [`CounterTree`]. Each counter knows
//! its parent (for rendering `"2.3.1"`) and at most one child (for reset
//! propagation), e.g. when a new section begins its subsection numbering
//! restarts.

use std::fmt;

/// Handle to a counter inside a [`CounterTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterId(usize);

#[derive(Debug, Clone, Default)]
struct Counter {
    value: u32,
    parent: Option<CounterId>,
    child: Option<CounterId>,
}

/// Arena of hierarchical counters.
#[derive(Debug, Clone, Default)]
pub struct CounterTree {
    counters: Vec<Counter>,
}

impl CounterTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter with no parent, starting at zero.
    pub fn new_root(&mut self) -> CounterId {
        self.push(Counter::default())
    }

    /// Create a child of `parent` and make it the parent's only child.
    ///
    /// A previous child is detached and no longer reset by its old parent.
    pub fn spawn_child(&mut self, parent: CounterId) -> CounterId {
        let child = self.push(Counter {
            parent: Some(parent),
            ..Counter::default()
        });
        self.counters[parent.0].child = Some(child);
        child
    }

    /// Increment by one and reset the whole child subtree.
    pub fn increase(&mut self, id: CounterId) {
        self.counters[id.0].value += 1;
        if let Some(child) = self.counters[id.0].child {
            self.reset(child);
        }
    }

    /// Set to zero, together with the whole child subtree.
    pub fn reset(&mut self, id: CounterId) {
        let mut next = Some(id);
        while let Some(current) = next {
            let counter = &mut self.counters[current.0];
            counter.value = 0;
            next = counter.child;
        }
    }

    pub fn value(&self, id: CounterId) -> u32 {
        self.counters[id.0].value
    }

    pub fn parent(&self, id: CounterId) -> Option<CounterId> {
        self.counters[id.0].parent
    }

    /// Dot-joined values from the root ancestor down to `id`.
    pub fn display(&self, id: CounterId) -> CounterDisplay<'_> {
        CounterDisplay { tree: self, id }
    }

    fn push(&mut self, counter: Counter) -> CounterId {
        self.counters.push(counter);
        CounterId(self.counters.len() - 1)
    }
}

/// Formats a counter as its full ancestor chain, e.g. `2.3.1`.
pub struct CounterDisplay<'a> {
    tree: &'a CounterTree,
    id: CounterId,
}

impl fmt::Display for CounterDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.tree.parent(self.id) {
            write!(f, "{}.", self.tree.display(parent))?;
        }
        write!(f, "{}", self.tree.value(self.id))
    }
}
