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

//! This module provides the implementation of subproblem rankings that are used to
//! set the ordering of the solver fringe.

use std::cmp::Ordering;

use crate::{Objective, SubProblem, SubProblemRanking};
use crate::implementation::mdd::compare_values;

/// The MaxUB (maximum upper bound) strategy is one that always selects the node
/// having the highest upper bound in the fringe. In case of equalities, the
/// ties are broken using the length of the longest path.
///
/// # Example
/// ```
/// # use diderot::*;
/// let sub = |state: char, value: isize, ub: isize| SubProblem::<char, isize, isize> {
///     state, value, ub, path: vec![], depth: 0
/// };
///
/// let mut priority_q = SimpleFringe::new(MaxUB);
/// priority_q.push(sub('a', 42, 300));
/// priority_q.push(sub('b',  2, 100));
/// priority_q.push(sub('c', 24, 150));
/// priority_q.push(sub('d', 13,  60));
/// priority_q.push(sub('e', 65, 700));
/// priority_q.push(sub('f', 19, 100));
///
/// assert_eq!(Some('e'), priority_q.pop().map(|s| s.state)); // because 700 is the highest upper bound
/// assert_eq!(Some('a'), priority_q.pop().map(|s| s.state)); // because 300 is the next highest
/// assert_eq!(Some('c'), priority_q.pop().map(|s| s.state)); // idem, because of ub = 150
/// assert_eq!(Some('f'), priority_q.pop().map(|s| s.state)); // because ub = 100 but value = 19
/// assert_eq!(Some('b'), priority_q.pop().map(|s| s.state)); // because ub = 100 but value = 2
/// assert_eq!(Some('d'), priority_q.pop().map(|s| s.state)); // because ub = 60 which is the worst
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxUB;
impl<S, D, V: Objective> SubProblemRanking<S, D, V> for MaxUB {
    fn compare(&self, l: &SubProblem<S, D, V>, r: &SubProblem<S, D, V>) -> Ordering {
        compare_values(&l.ub, &r.ub)
            .then_with(|| compare_values(&l.value, &r.value))
    }
}
