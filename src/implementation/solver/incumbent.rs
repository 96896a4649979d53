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

//! The incumbent is the best feasible solution known at any time of the
//! search. It is shared by all the threads of the branch-and-bound.

use parking_lot::Mutex;

use crate::{Objective, Solution};

/// A thread safe cell holding the best known solution. Its value never
/// decreases: a solution is only ever replaced by a strictly better one.
#[derive(Debug)]
pub struct Incumbent<D, V> {
    best: Mutex<Option<Solution<D, V>>>,
}

impl<D, V> Default for Incumbent<D, V> {
    fn default() -> Self {
        Self { best: Mutex::new(None) }
    }
}

impl<D: Clone, V: Objective> Incumbent<D, V> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Atomically replaces the current incumbent by `solution` iff its value
    /// is strictly greater than the current one. Returns true iff the
    /// incumbent was updated.
    pub fn offer(&self, solution: Solution<D, V>) -> bool {
        let mut best = self.best.lock();
        let improves = match best.as_ref() {
            Some(current) => solution.value > current.value,
            None => true,
        };
        if improves {
            *best = Some(solution);
        }
        improves
    }
    /// The value of the incumbent (minus infinity when there is none)
    pub fn value(&self) -> V {
        self.best.lock().as_ref().map_or_else(V::neg_infinity, |s| s.value)
    }
    /// The value of the incumbent, if any.
    pub fn best_value(&self) -> Option<V> {
        self.best.lock().as_ref().map(|s| s.value)
    }
    pub fn solution(&self) -> Option<Solution<D, V>> {
        self.best.lock().clone()
    }
}
