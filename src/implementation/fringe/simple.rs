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

//! The priority queue of pending subproblems.

use binary_heap_plus::BinaryHeap;

use crate::{CompareSubProblem, SubProblem, SubProblemRanking};

/// The fringe holds the subproblems that remain to be explored. It is a binary
/// heap which pops the greatest subproblem according to its ranking first.
///
/// # Note
/// The branch-and-bound always uses a `SimpleFringe` ordered with `MaxUB`, so
/// the first subproblem popped bounds the value of all the remaining ones.
pub struct SimpleFringe<S, D, V, O: SubProblemRanking<S, D, V>> {
    heap: BinaryHeap<SubProblem<S, D, V>, CompareSubProblem<O>>
}
impl <S, D, V, O> SimpleFringe<S, D, V, O> where O: SubProblemRanking<S, D, V> {
    /// This creates a new simple fringe which uses a custom fringe order.
    pub fn new(o: O) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], CompareSubProblem::new(o)) }
    }
    pub fn push(&mut self, node: SubProblem<S, D, V>) {
        self.heap.push(node)
    }
    pub fn pop(&mut self) -> Option<SubProblem<S, D, V>> {
        self.heap.pop()
    }
    pub fn clear(&mut self) {
        self.heap.clear()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
