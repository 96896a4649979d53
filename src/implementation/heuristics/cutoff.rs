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

//! Cutoffs tell the workers of the branch-and-bound when to give up on proving
//! optimality and return their incumbent instead.

use std::{sync::{Arc, atomic::{AtomicBool, Ordering}}, time::{Duration, Instant}};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It never interrupts anything, so
/// the search goes on until it proves optimality.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}

/// Interrupts the search once a wall-clock deadline has passed. The deadline
/// is fixed when the budget is created, not when `maximize` starts. After
/// it, the workers stop picking subproblems from the fringe and the solver
/// reports its incumbent as a solution that is not proven optimal.
///
/// # Example
/// ```
/// # use diderot::*;
/// use std::time::Duration;
///
/// let budget = TimeBudget::new(Duration::from_secs(10));
/// assert!(!budget.must_stop());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    deadline: Instant,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now() + budget }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// A cutoff which is raised on demand: all the clones of a `StopFlag` share
/// the same flag, so one of them can be kept to interrupt a search that is
/// running on some other thread.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    stop  : Arc<AtomicBool>
}
impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }
    /// Requests the search to stop as soon as possible
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
impl Cutoff for StopFlag {
    fn must_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
