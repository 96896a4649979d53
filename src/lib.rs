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

//! # Diderot
//! Diderot is a generic engine to solve discrete optimization problems with
//! decision diagrams. Its goal is to let you describe your optimization
//! problem as a dynamic program (see `Problem`): a set of states and the
//! transitions that assigning a value to a variable triggers. The engine
//! compiles that dynamic program into a layered decision diagram, top down,
//! and finds its longest path while doing so.
//!
//! When the exact diagram is too large, the engine resorts to a
//! branch-and-bound which alternates restricted diagrams (some nodes of the
//! too wide layers are dropped: every path is feasible) and relaxed diagrams
//! (some nodes are merged with a user provided `Relaxation`: the longest path
//! is an upper bound). The exact cutset of the relaxed diagrams is used to
//! branch on new subproblems until optimality is proved.
//!
//! ## Side benefit
//! As a side benefit from using `diderot`, you will be able to exploit all of
//! your hardware to solve your optimization in parallel.
//!
//! ## Quick Example
//! The following presents a minimalistic use of diderot. It implements a
//! solver for the knapsack problem. This example is shown for illustration
//! purpose because it is pretty simple and chances are high anybody is
//! already comfortable with the problem definition.
//!
//! #### Describe the problem as dynamic program
//! The first thing to do in this example is to describe the binary knapsack
//! problem in terms of a dynamic program. Here, the state of a node, is nothing
//! more than an unsigned integer (usize). That unsigned integer represents the
//! remaining capacity of our sack. To do so, you define your own structure and
//! make sure it implements the `Problem` trait.
//! ```
//! # use diderot::*;
//! #
//! #[derive(Debug, Clone)]
//! struct Knapsack {
//!     capacity: usize,
//!     profit  : Vec<isize>,
//!     weight  : Vec<usize>
//! }
//! impl Problem for Knapsack {
//!     type State  = usize;
//!     type Domain = isize;
//!     type Value  = isize;
//!
//!     fn nb_variables(&self) -> usize {
//!         self.profit.len()
//!     }
//!     fn initial_state(&self) -> usize {
//!         self.capacity
//!     }
//!     fn transitions(&self, state: &usize, variable: Variable) -> Transitions<usize, isize, isize> {
//!         let item = variable.id();
//!         let leave_it = Decision { variable, value: 0 };
//!         let take_it  = Decision { variable, value: 1 };
//!
//!         let mut out = vec![(Arc::new(*state, leave_it, 0), *state)];
//!         if *state >= self.weight[item] {
//!             let arc = Arc::new(*state, take_it, self.profit[item]);
//!             out.push((arc, state - self.weight[item]));
//!         }
//!         out
//!     }
//! }
//! ```
//!
//! #### Define a Relaxation
//! The relaxation we will define is probably the simplest you can think of.
//! When one needs to define a new state to replace those exceeding the maximum
//! width of the diagram, we will simply keep the state with the maximum
//! capacity as it enables at least all the possibly behaviors feasible with
//! lesser capacities.
//!
//! ```
//! # use diderot::*;
//! #
//! #[derive(Debug, Clone)]
//! struct KPRelax;
//! impl Relaxation for KPRelax {
//!     type State = usize;
//!
//!     /// To merge a given selection of states (capacities) we will keep the
//!     /// maximum capacity. This is an obvious relaxation as it allows us to
//!     /// put more items in the sack.
//!     fn merge(&self, states: &mut dyn Iterator<Item = &usize>) -> Result<usize, Error> {
//!         states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
//!     }
//! }
//! ```
//!
//! # Solve the problem
//! ```
//! # use diderot::*;
//! #
//! # #[derive(Debug, Clone)]
//! # struct Knapsack {
//! #     capacity: usize,
//! #     profit  : Vec<isize>,
//! #     weight  : Vec<usize>
//! # }
//! # impl Problem for Knapsack {
//! #     type State  = usize;
//! #     type Domain = isize;
//! #     type Value  = isize;
//! #     fn nb_variables(&self) -> usize {
//! #         self.profit.len()
//! #     }
//! #     fn initial_state(&self) -> usize {
//! #         self.capacity
//! #     }
//! #     fn transitions(&self, state: &usize, variable: Variable) -> Transitions<usize, isize, isize> {
//! #         let item = variable.id();
//! #         let mut out = vec![(Arc::new(*state, Decision { variable, value: 0 }, 0), *state)];
//! #         if *state >= self.weight[item] {
//! #             let arc = Arc::new(*state, Decision { variable, value: 1 }, self.profit[item]);
//! #             out.push((arc, state - self.weight[item]));
//! #         }
//! #         out
//! #     }
//! # }
//! # #[derive(Debug, Clone)]
//! # struct KPRelax;
//! # impl Relaxation for KPRelax {
//! #     type State = usize;
//! #     fn merge(&self, states: &mut dyn Iterator<Item = &usize>) -> Result<usize, Error> {
//! #         states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
//! #     }
//! # }
//! // 1. Create an instance of our knapsack problem
//! let problem = Knapsack {
//!     capacity: 50,
//!     profit  : vec![60, 100, 120],
//!     weight  : vec![10,  20,  30]
//! };
//!
//! // 2. Small instances can be solved with one single exact diagram
//! let exact = solve_exact(&problem).unwrap();
//! assert_eq!(220, exact.value);
//!
//! // 3. Larger ones need a branch-and-bound where no layer of the restricted
//! //    and relaxed diagrams has more than (say) 2 nodes
//! let restrict = Restrict::new(2);
//! let relax    = Relax::new(2, KPRelax);
//! let solution = branch_and_bound(&problem, &restrict, &relax).unwrap();
//!
//! // 4. Do whatever you like with the optimal solution.
//! assert_eq!(220, solution.value);
//! println!("Solution");
//! for decision in solution.decisions.iter() {
//!     if decision.value == 1 {
//!         println!("{}", decision.variable.id());
//!     }
//! }
//! ```
//!
//! ## Going further / Getting a grasp on the codebase
//! The easiest way to get your way around with Diderot is probably to start
//! with the types `Problem` and `Relaxation` which define the core
//! abstractions you will need to implement. After that, it is also
//! interesting to have a look at the `BranchAndBoundBuilder` and at the
//! heuristics it can be configured with (`VariableOrder`, `NodeRanking`,
//! `Cutoff`, `CutsetType`). The lower level building blocks (`Diagram`,
//! `top_down`, `longest_path`) can be used on their own to compile one single
//! diagram.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;

#[cfg(test)]
mod test_utils;
