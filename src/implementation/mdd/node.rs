// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The arcs and nodes a layered decision diagram is made of.

use std::cmp::Ordering;

use crate::{Decision, Objective};

/// Materializes one arc (transition) of the decision diagram. It remembers
/// the state it originates from, the decision that triggered the transition
/// and the contribution of that decision to the objective function.
///
/// The source state is only a back-reference: it is the key under which the
/// source node can be found in the previous layer of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc<S, D, V> {
    /// The state at the ∗∗source∗∗ of this arc.
    pub tail: S,
    /// This is the decision label associated to this arc. It gives the
    /// information "what variable" is assigned to "what value".
    pub decision: Decision<D>,
    /// This is the objective contribution of making this decision from the
    /// source state.
    pub value: V,
}
impl<S, D, V> Arc<S, D, V> {
    pub fn new(tail: S, decision: Decision<D>, value: V) -> Self {
        Self { tail, decision, value }
    }
}

/// The meta data associated with one state of a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S, D, V> {
    /// The length of the longest path found so far between the root of the
    /// diagram and this node.
    pub distance: V,
    /// The last arc on that longest path (None for the root only).
    pub arc: Option<Arc<S, D, V>>,
    /// True iff the longest path to this node only traverses exact layers
    /// and this node was neither merged nor created by a relaxation.
    pub exact: bool,
    /// Set when this exact node has at least one successor which is inexact
    /// or has been discarded by the processing of the next layer.
    pub(crate) frontier: bool,
}
impl<S, D, V: Objective> Node<S, D, V> {
    pub fn new(distance: V, arc: Option<Arc<S, D, V>>, exact: bool) -> Self {
        Self { distance, arc, exact, frontier: false }
    }
    /// The root node of a diagram: exact and at distance zero.
    pub fn root() -> Self {
        Self::new(V::zero(), None, true)
    }
    /// Returns true iff this node belongs to the frontier cutset.
    pub fn is_frontier(&self) -> bool {
        self.frontier
    }
}

/// Total order on objective values (incomparable values are deemed equal).
pub(crate) fn compare_values<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
