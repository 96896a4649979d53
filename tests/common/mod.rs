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

//! Problem models shared by the integration tests. Each test binary only uses
//! part of them.
#![allow(dead_code)]

use diderot::*;

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
#[derive(Debug, Clone)]
pub struct Knapsack {
    pub capacity: usize,
    pub profit  : Vec<isize>,
    pub weight  : Vec<usize>,
}
impl Knapsack {
    pub fn is_feasible(&self, solution: &Solution<isize, isize>) -> bool {
        if solution.decisions.len() != self.profit.len() {
            return false;
        }
        let mut weight = 0;
        let mut profit = 0;
        for (i, d) in solution.decisions.iter().enumerate() {
            if d.variable.id() != i || !(d.value == 0 || d.value == 1) {
                return false;
            }
            weight += self.weight[i] * d.value as usize;
            profit += self.profit[i] * d.value;
        }
        weight <= self.capacity && profit == solution.value
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
pub struct KPRelax;
impl Relaxation for KPRelax {
    type State = usize;

    fn merge(&self, states: &mut dyn Iterator<Item = &usize>) -> Result<usize, Error> {
        states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
    }
}

// ----------------------------------------------------------------------------
// --- FRACTIONAL PROFITS -----------------------------------------------------
// ----------------------------------------------------------------------------
/// A knapsack whose profits are floating point numbers. The state is the
/// remaining capacity.
#[derive(Debug, Clone)]
pub struct FloatKnapsack {
    pub capacity: u32,
    pub profit  : Vec<f64>,
    pub weight  : Vec<u32>,
}
impl Problem for FloatKnapsack {
    type State = u32;
    type Domain = bool;
    type Value = f64;

    fn nb_variables(&self) -> usize {
        self.profit.len()
    }
    fn initial_state(&self) -> u32 {
        self.capacity
    }
    fn transitions(&self, state: &u32, variable: Variable) -> Transitions<u32, bool, f64> {
        let i = variable.id();
        let mut out = vec![(Arc::new(*state, Decision { variable, value: false }, 0.0), *state)];
        if *state >= self.weight[i] {
            let arc = Arc::new(*state, Decision { variable, value: true }, self.profit[i]);
            out.push((arc, state - self.weight[i]));
        }
        out
    }
}
pub struct FloatKPRelax;
impl Relaxation for FloatKPRelax {
    type State = u32;

    fn merge(&self, states: &mut dyn Iterator<Item = &u32>) -> Result<u32, Error> {
        states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
    }
}

// ----------------------------------------------------------------------------
// --- SET COVER --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The unweighted set cover: pick as few sets as possible so that each element
/// of the universe belongs to at least one of them. Variable `i` decides
/// whether set `i` is picked, and each pick costs one unit of the objective
/// (which is thus the opposite of the number of picked sets).
///
/// The state is the bitset of the elements that still need to be covered.
#[derive(Debug, Clone)]
pub struct SetCover {
    pub nb_elements: usize,
    pub sets       : Vec<u64>,
    /// For each element, the index of the last set that contains it
    last_cover     : Vec<Option<usize>>,
}
impl SetCover {
    pub fn new(nb_elements: usize, sets: &[&[usize]]) -> Self {
        assert!(nb_elements < 64);
        let sets: Vec<u64> = sets.iter()
            .map(|s| s.iter().fold(0_u64, |acc, e| acc | (1 << e)))
            .collect();
        let last_cover = (0..nb_elements)
            .map(|e| (0..sets.len()).rev().find(|i| sets[*i] & (1 << e) != 0))
            .collect();
        Self { nb_elements, sets, last_cover }
    }
    /// The elements which must be covered by set `i` at the latest
    fn due_at(&self, i: usize) -> u64 {
        (0..self.nb_elements)
            .filter(|e| self.last_cover[*e] == Some(i))
            .fold(0_u64, |acc, e| acc | (1 << e))
    }
    pub fn is_feasible(&self, solution: &Solution<bool, i32>) -> bool {
        let covered = solution.decisions.iter()
            .filter(|d| d.value)
            .fold(0_u64, |acc, d| acc | self.sets[d.variable.id()]);
        let picked = solution.decisions.iter().filter(|d| d.value).count() as i32;
        let universe = (1_u64 << self.nb_elements) - 1;

        solution.decisions.len() == self.sets.len()
            && covered & universe == universe
            && -picked == solution.value
    }
}
impl Problem for SetCover {
    type State = u64;
    type Domain = bool;
    type Value = i32;

    fn nb_variables(&self) -> usize {
        self.sets.len()
    }
    fn initial_state(&self) -> u64 {
        if self.last_cover.iter().any(|c| c.is_none()) {
            // no set covers some element: a sentinel which has no transition
            u64::MAX
        } else {
            (1 << self.nb_elements) - 1
        }
    }
    fn transitions(&self, state: &u64, variable: Variable) -> Transitions<u64, bool, i32> {
        let i = variable.id();
        let mut out = vec![];
        if *state == u64::MAX {
            return out;
        }
        if *state & self.due_at(i) == 0 {
            out.push((Arc::new(*state, Decision { variable, value: false }, 0), *state));
        }
        out.push((Arc::new(*state, Decision { variable, value: true }, -1), *state & !self.sets[i]));
        out
    }
}
/// Merging keeps the elements that every merged state still needs to cover
pub struct SetCoverRelax;
impl Relaxation for SetCoverRelax {
    type State = u64;

    fn merge(&self, states: &mut dyn Iterator<Item = &u64>) -> Result<u64, Error> {
        states.fold(None, |acc: Option<u64>, s| Some(acc.map_or(*s, |a| a & s)))
            .ok_or_else(|| Error::contract("nothing to merge"))
    }
}

// ----------------------------------------------------------------------------
// --- VARIABLE ORDERS --------------------------------------------------------
// ----------------------------------------------------------------------------
/// Branches on the free variable having the largest id
#[derive(Debug, Clone, Copy)]
pub struct ReverseOrder;
impl<P: Problem> VariableOrder<P> for ReverseOrder {
    fn next_variable(&self, _: &P, diagram: &Diagram<P::State, P::Domain, P::Value>) -> Option<Variable> {
        (0..diagram.nb_variables()).rev().map(Variable).find(|v| !diagram.is_assigned(*v))
    }
}
/// Picks the smallest free variable when the last layer has an even number
/// of nodes and the largest one otherwise.
#[derive(Debug, Clone, Copy)]
pub struct WidthDrivenOrder;
impl<P: Problem> VariableOrder<P> for WidthDrivenOrder {
    fn next_variable(&self, _: &P, diagram: &Diagram<P::State, P::Domain, P::Value>) -> Option<Variable> {
        let mut free = (0..diagram.nb_variables()).map(Variable).filter(|v| !diagram.is_assigned(*v));
        if diagram.last_layer().len() % 2 == 0 {
            free.next()
        } else {
            free.last()
        }
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
