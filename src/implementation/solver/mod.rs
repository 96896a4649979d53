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

//! This module and its sub modules provide the actual implementations of the
//! solvers. The `parallel` sub module provides the `BranchAndBound` structure
//! which implements the `Solver` trait and is able to exploit multiple threads.
//! This module also provides two convenience functions: `solve_exact` which
//! compiles one single exact diagram, and `branch_and_bound` which runs the
//! branch-and-bound with the default configuration.
mod incumbent;
mod parallel;

pub use incumbent::*;
pub use parallel::*;

use crate::{Diagram, Error, Identity, LayerProcessing, NaturalOrder, Problem, Solution, Solver, longest_path, top_down};

/// Solves the `problem` by compiling its exact decision diagram. This is only
/// practical for instances small enough to be diagrammed in full.
pub fn solve_exact<P: Problem + ?Sized>(problem: &P) -> Result<Solution<P::Domain, P::Value>, Error> {
    let mut diagram = Diagram::new(problem);
    top_down(&mut diagram, problem, &NaturalOrder, &Identity)?;
    longest_path(&diagram)
}

/// Solves the `problem` to optimality with a branch-and-bound that compiles
/// restricted diagrams with `restrict` and relaxed ones with `relax`. The
/// variables are assigned in their natural order and the frontier cutset is
/// used to branch.
///
/// # Errors
/// * `Infeasible` when the problem admits no solution,
/// * any error raised while compiling the diagrams.
pub fn branch_and_bound<P>(
    problem: &P,
    restrict: &(dyn LayerProcessing<P::State, P::Domain, P::Value> + Send + Sync),
    relax: &(dyn LayerProcessing<P::State, P::Domain, P::Value> + Send + Sync),
) -> Result<Solution<P::Domain, P::Value>, Error>
where
    P: Problem + Sync,
    P::State: Send + Sync,
    P::Domain: Send + Sync,
{
    let mut solver = BranchAndBoundBuilder::default()
        .problem(problem)
        .restrict(restrict)
        .relax(relax)
        .build()
        .map_err(|e| Error::contract(e.to_string()))?;

    let completion = solver.maximize()?;
    match solver.best_solution() {
        Some(solution) => Ok(solution),
        None if completion.is_exact => Err(Error::Infeasible),
        None => Err(Error::Interrupted),
    }
}
