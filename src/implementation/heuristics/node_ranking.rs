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

//! This module provides the implementation of the node rankings which decide
//! what nodes are kept when a layer is restricted or relaxed.

use std::cmp::Ordering;

use crate::{Node, NodeRanking, Objective, StateRanking};
use crate::implementation::mdd::compare_values;

/// _This is the default node ranking._ The nodes having the longest distance
/// from the root are deemed the most promising ones.
#[derive(Debug, Default, Copy, Clone)]
pub struct ByDistance;
impl<S, D, V: Objective> NodeRanking<S, D, V> for ByDistance {
    fn compare(&self, a: (&S, &Node<S, D, V>), b: (&S, &Node<S, D, V>)) -> Ordering {
        compare_values(&a.1.distance, &b.1.distance)
    }
}

/// Ranks the nodes by distance first, and breaks the ties with a user
/// provided `StateRanking`.
#[derive(Debug, Default, Copy, Clone)]
pub struct ThenByState<X>(pub X);
impl<S, D, V, X> NodeRanking<S, D, V> for ThenByState<X>
where
    V: Objective,
    X: StateRanking<State = S>,
{
    fn compare(&self, a: (&S, &Node<S, D, V>), b: (&S, &Node<S, D, V>)) -> Ordering {
        compare_values(&a.1.distance, &b.1.distance)
            .then_with(|| self.0.compare(a.0, b.0))
    }
}
