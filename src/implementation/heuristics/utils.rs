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

//! Glue between the subproblem rankings and the `compare` crate.

use std::cmp::Ordering;

use compare::Compare;

use crate::{SubProblem, SubProblemRanking};

/// Adapts a `SubProblemRanking` to the `Compare` trait, which is what the
/// heaps of `binary-heap-plus` expect. The fringe relies on it to pop the
/// subproblems in the order chosen by its ranking.
///
/// # Example
/// ```
/// # use diderot::*;
/// # use binary_heap_plus::BinaryHeap;
/// let mut heap: BinaryHeap<SubProblem<usize, isize, isize>, _> =
///     BinaryHeap::from_vec_cmp(vec![], CompareSubProblem::new(MaxUB));
/// heap.push(SubProblem { state: 1, value: 0, ub: 10, path: vec![], depth: 0 });
/// heap.push(SubProblem { state: 2, value: 0, ub: 30, path: vec![], depth: 0 });
/// // the subproblem having the highest upper bound comes out first
/// assert_eq!(Some(30), heap.pop().map(|s| s.ub));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareSubProblem<X>(X);
impl <X> CompareSubProblem<X> {
    pub fn new(ranking: X) -> Self {
        Self(ranking)
    }
}
impl <S, D, V, X> Compare<SubProblem<S, D, V>> for CompareSubProblem<X>
where X: SubProblemRanking<S, D, V>
{
    fn compare(&self, l: &SubProblem<S, D, V>, r: &SubProblem<S, D, V>) -> Ordering {
        self.0.compare(l, r)
    }
}
