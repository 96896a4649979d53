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

//! This module provides some utilities to write unit tests, the most notable
//! of which are small problem definitions whose optimum is known.

use crate::{Arc, Decision, Error, Objective, Problem, Relaxation, Solution, Transitions, Variable};

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The binary knapsack: the state is the remaining capacity of the sack
#[derive(Debug, Clone)]
pub struct Knapsack {
    pub capacity: usize,
    pub profit  : Vec<isize>,
    pub weight  : Vec<usize>,
}
impl Knapsack {
    /// Returns true iff the solution assigns every item exactly once, fits
    /// in the sack and is worth its announced value
    pub fn is_feasible(&self, solution: &Solution<isize, isize>) -> bool {
        let mut seen = vec![false; self.profit.len()];
        let mut weight = 0;
        let mut profit = 0;
        for d in solution.decisions.iter() {
            let i = d.variable.id();
            if i >= seen.len() || seen[i] || !(d.value == 0 || d.value == 1) {
                return false;
            }
            seen[i] = true;
            weight += self.weight[i] * d.value as usize;
            profit += self.profit[i] * d.value;
        }
        seen.iter().all(|s| *s) && weight <= self.capacity && profit == solution.value
    }
}
impl Problem for Knapsack {
    type State = usize;
    type Domain = isize;
    type Value = isize;

    fn nb_variables(&self) -> usize {
        self.profit.len()
    }
    fn initial_state(&self) -> usize {
        self.capacity
    }
    fn transitions(&self, state: &usize, variable: Variable) -> Transitions<usize, isize, isize> {
        let i = variable.id();
        let mut out = vec![(Arc::new(*state, Decision { variable, value: 0 }, 0), *state)];
        if *state >= self.weight[i] {
            let arc = Arc::new(*state, Decision { variable, value: 1 }, self.profit[i]);
            out.push((arc, state - self.weight[i]));
        }
        out
    }
}
/// Merging capacities keeps the largest one
pub struct KPRelax;
impl Relaxation for KPRelax {
    type State = usize;

    fn merge(&self, states: &mut dyn Iterator<Item = &usize>) -> Result<usize, Error> {
        states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
    }
}

/// Optimum: 220 (items 1 and 2)
pub fn knapsack_3_items() -> Knapsack {
    Knapsack {
        capacity: 50,
        profit  : vec![60, 100, 120],
        weight  : vec![10,  20,  30],
    }
}
/// Optimum: 220
pub fn knapsack_7_items() -> Knapsack {
    Knapsack {
        capacity: 50,
        profit  : vec![60, 100, 120, 40, 30, 70, 20],
        weight  : vec![10,  20,  30, 15, 12, 25,  8],
    }
}

// ----------------------------------------------------------------------------
// --- BINARY SUM -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Each variable is either 0 (worth nothing) or 1 (worth `values[i]`) and
/// there is no constraint at all. The state is the sum accumulated so far.
#[derive(Debug, Clone)]
pub struct BinarySum {
    pub values: Vec<isize>,
}
impl BinarySum {
    pub fn new(values: Vec<isize>) -> Self {
        Self { values }
    }
}
impl Problem for BinarySum {
    type State = isize;
    type Domain = isize;
    type Value = isize;

    fn nb_variables(&self) -> usize {
        self.values.len()
    }
    fn initial_state(&self) -> isize {
        0
    }
    fn transitions(&self, state: &isize, variable: Variable) -> Transitions<isize, isize, isize> {
        let v = self.values[variable.id()];
        vec![
            (Arc::new(*state, Decision { variable, value: 0 }, 0), *state),
            (Arc::new(*state, Decision { variable, value: 1 }, v), state + v),
        ]
    }
}
pub struct SumRelax;
impl Relaxation for SumRelax {
    type State = isize;

    fn merge(&self, states: &mut dyn Iterator<Item = &isize>) -> Result<isize, Error> {
        states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
    }
}

// ----------------------------------------------------------------------------
// --- DEGENERATE PROBLEMS ----------------------------------------------------
// ----------------------------------------------------------------------------
/// A problem whose root state has no transition at all
pub struct Infeasible {
    pub n: usize,
}
impl Problem for Infeasible {
    type State = usize;
    type Domain = isize;
    type Value = isize;

    fn nb_variables(&self) -> usize {
        self.n
    }
    fn initial_state(&self) -> usize {
        0
    }
    fn transitions(&self, _: &usize, _: Variable) -> Transitions<usize, isize, isize> {
        vec![]
    }
}

/// A problem without any variable
pub struct ZeroVariables;
impl Problem for ZeroVariables {
    type State = usize;
    type Domain = isize;
    type Value = isize;

    fn nb_variables(&self) -> usize {
        0
    }
    fn initial_state(&self) -> usize {
        0
    }
    fn transitions(&self, _: &usize, _: Variable) -> Transitions<usize, isize, isize> {
        vec![]
    }
}

/// A relaxation which always fails
pub struct FailingRelax;
impl Relaxation for FailingRelax {
    type State = usize;

    fn merge(&self, _: &mut dyn Iterator<Item = &usize>) -> Result<usize, Error> {
        Err(Error::contract("this relaxation always fails"))
    }
}

// ----------------------------------------------------------------------------
// --- BRUTE FORCE ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Enumerates all the paths of the problem (assigning the variables in their
/// natural order) and returns the value of the best one.
pub fn brute_force<P: Problem>(problem: &P) -> Option<P::Value> {
    fn explore<P: Problem>(problem: &P, state: &P::State, depth: usize, value: P::Value) -> Option<P::Value> {
        if depth == problem.nb_variables() {
            return Some(value);
        }
        problem.transitions(state, Variable(depth)).into_iter()
            .filter_map(|(arc, next)| explore(problem, &next, depth + 1, value + arc.value))
            .fold(None, |best, v| match best {
                Some(b) if b >= v => Some(b),
                _ => Some(v),
            })
    }
    explore(problem, &problem.initial_state(), 0, P::Value::zero())
}

#[test]
fn brute_force_finds_the_known_optima() {
    assert_eq!(Some(220), brute_force(&knapsack_3_items()));
    assert_eq!(Some(220), brute_force(&knapsack_7_items()));
    assert_eq!(Some(6), brute_force(&BinarySum::new(vec![1, 2, 3])));
    assert_eq!(None, brute_force(&Infeasible { n: 2 }));
    assert_eq!(Some(0), brute_force(&ZeroVariables));
}
