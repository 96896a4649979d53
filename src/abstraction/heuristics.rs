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

//! This module defines the traits used to encapsulate solver heuristics.
//!
//! Namely, it defines :
//!
//!  - the `VariableOrder` which decides what variable is assigned by the next
//!    layer of a diagram
//!  - the `LayerProcessing` which is how a layer gets restricted or relaxed
//!    so as to bound the width of a diagram
//!  - the `NodeRanking` and `StateRanking` heuristics which are used to guess
//!    the nodes promisingness
//!  - the `SubProblemRanking` which orders the nodes on the solver fringe
//!  - the `Cutoff` heuristic which is used to impose a stopping criterion on
//!    the solver resolution.

use std::cmp::Ordering;

use crate::{Diagram, Error, Layer, Node, Problem, SubProblem, Variable};

/// This trait encapsulates the heuristic deciding which variable gets assigned
/// by the next layer of a diagram under construction.
///
/// The partially built `diagram` is made available so that the choice can
/// depend on the variables that have already been assigned or on the nodes
/// of its last layer (see `Diagram::last_layer`).
pub trait VariableOrder<P: Problem + ?Sized> {
    /// Returns the variable to branch on next, or `None` when there is none
    /// left. Returning `None` (or an already assigned variable) while some
    /// variables remain unassigned is a contract violation.
    fn next_variable(&self, problem: &P, diagram: &Diagram<P::State, P::Domain, P::Value>)
        -> Option<Variable>;
}

/// A layer processing turns a freshly expanded layer into the layer that is
/// actually kept in the diagram. This is the seam through which diagrams are
/// restricted (some nodes are dropped) or relaxed (some nodes are merged).
///
/// An implementation which alters the nodes of a layer must mark that layer
/// as inexact (`Layer::set_exact(false)`).
pub trait LayerProcessing<S, D, V> {
    /// Processes the `layer` reached after `depth` decisions from the root of
    /// the diagram (the first layer below the root has depth 1).
    fn process(&self, depth: usize, layer: Layer<S, D, V>) -> Result<Layer<S, D, V>, Error>;
}

/// A node ranking is an heuristic that imposes a partial order on the nodes
/// of a layer. This order is used by the framework as a means to discriminate
/// the most promising nodes from the least promising ones when restricting or
/// relaxing a layer.
///
/// According to this ordering, greater means better and hence more likely to
/// be kept after restriction or relaxation.
pub trait NodeRanking<S, D, V> {
    fn compare(&self, a: (&S, &Node<S, D, V>), b: (&S, &Node<S, D, V>)) -> Ordering;
}

/// A state ranking is an heuristic that imposes a partial order on states.
/// It is typically used to break the ties between nodes having the same
/// distance from the root (see `ThenByState`).
pub trait StateRanking {
    /// As is the case for `Problem` and `Relaxation`, a `StateRanking` must
    /// tell the kind of states it is able to operate on.
    type State;

    /// This method compares two states and determines which is the most
    /// desirable to keep. In this ordering, greater means better.
    fn compare(&self, a: &Self::State, b: &Self::State) -> Ordering;
}

/// A subproblem ranking is an heuristic that imposes a partial order on
/// subproblems on the solver fringe. In this ordering, greater means more
/// likely to be popped first.
pub trait SubProblemRanking<S, D, V> {
    fn compare(&self, a: &SubProblem<S, D, V>, b: &SubProblem<S, D, V>) -> Ordering;
}

/// This trait encapsulates a criterion (external to the solver) which imposes
/// to stop searching for a better solution. Typically, this is done to grant
/// a given time budget to the search.
pub trait Cutoff {
    /// Returns true iff the criterion is met and the search must stop.
    fn must_stop(&self) -> bool;
}
