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

//! This module defines the basic abstractions one will manipulate when
//! implementing a decision diagram based solver for some problem formulated
//! as a dynamic program.
//!
//! The most important abstractions that should be provided by a client are
//! `Problem` and `Relaxation`.

use std::hash::Hash;

use crate::{Arc, Error, Objective, Variable};

/// The outgoing transitions of one state: each arc (source state, decision,
/// objective contribution) is paired with the state it leads to.
pub type Transitions<S, D, V> = Vec<(Arc<S, D, V>, S)>;

/// This trait defines the "contract" of what defines an optimization problem
/// solvable with the branch-and-bound with DD paradigm. An implementation of
/// this trait effectively defines a DP formulation of the problem being solved.
/// That DP model is envisioned as a labeled transition system -- which makes
/// it more amenable to DD compilation.
pub trait Problem {
    /// The DP model of the problem manipulates a state which is user-defined.
    /// Two states are considered the same (and thus share one node of a
    /// layer) iff they compare equal.
    type State: Clone + Eq + Hash;
    /// The type of the values that can be assigned to the variables.
    type Domain: Clone;
    /// The numeric type of the objective function.
    type Value: Objective;

    /// Any problem bears on a number of variable $x_0, x_1, x_2, ... , x_{n-1}$
    /// This method returns the value of the number $n$
    fn nb_variables(&self) -> usize;
    /// This method returns the initial state of the problem (the state of $r$).
    fn initial_state(&self) -> Self::State;
    /// Enumerates all the feasible assignments of `variable` when in `state`.
    /// Each assignment yields an arc (whose tail is `state` and whose decision
    /// bears on `variable`) mapped to the state it leads to. An empty vector
    /// means that `state` is a dead end.
    ///
    /// This function must be deterministic.
    fn transitions(&self, state: &Self::State, variable: Variable)
        -> Transitions<Self::State, Self::Domain, Self::Value>;
}

/// A relaxation encapsulates the $\oplus$ operator which is necessary when
/// compiling relaxed DDs: it merges the states of two or more nodes so as to
/// create a new inexact node.
pub trait Relaxation {
    /// Similar to the DP model of the problem it relaxes, a relaxation operates
    /// on a set of states (the same as the problem).
    type State;

    /// This method implements the merge operation: it combines several `states`
    /// and yields a new state which is supposed to stand for all the other
    /// merged states. The merged state must never decrease the best objective
    /// value that is achievable from any of the merged states.
    ///
    /// The iterator is guaranteed to yield at least one state. A failure is
    /// reported to the caller of the solver as is.
    fn merge(&self, states: &mut dyn Iterator<Item = &Self::State>) -> Result<Self::State, Error>;
}
