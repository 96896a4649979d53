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

//! This module defines the `Solver` trait.

use crate::{Completion, Error, Solution};

/// This is the solver abstraction. It is implemented by a structure that
/// implements the branch-and-bound with DD paradigm to find the best possible
/// solution to a given problem.
pub trait Solver {
    /// The type of the values assigned to the problem variables
    type Domain;
    /// The type of the objective function
    type Value;

    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted maximization. Such a `Completion` may either be marked
    /// **exact** if the maximization has been carried out until optimality was
    /// proved. Or it can be inexact, in which case it means that the
    /// maximization process was stopped because of the satisfaction of some
    /// cutoff criterion.
    ///
    /// Four cases are to be distinguished:
    ///
    /// * `is_exact` and a `best_value`: the `best_value` is the maximum
    ///   value of the objective function.
    /// * not `is_exact` and a `best_value`: the `best_value` is the best
    ///   value of the objective function that was known at the time of cutoff.
    /// * `is_exact` and no `best_value`: the problem admits no feasible
    ///   solution.
    /// * not `is_exact` and no `best_value`: no feasible solution has been
    ///   found before the cutoff occurred.
    ///
    /// An error is only ever returned when a user supplied component breaks
    /// its contract.
    fn maximize(&mut self) -> Result<Completion<Self::Value>, Error>;
    /// This method returns the value of the objective function for the best
    /// solution that has been found. It returns `None` when no solution exists
    /// to the problem.
    fn best_value(&self) -> Option<Self::Value>;
    /// This method returns the best solution to the optimization problem.
    /// It returns `None` when no feasible solution has been found.
    fn best_solution(&self) -> Option<Solution<Self::Domain, Self::Value>>;
    /// Returns the best lower bound that has been identified so far.
    /// In case where no solution has been found, it returns -inf.
    fn best_lower_bound(&self) -> Self::Value;
    /// Sets a primal (best known value and solution) of the problem.
    fn set_primal(&mut self, solution: Solution<Self::Domain, Self::Value>);
    /// Returns the number of subproblems that have been explored so far.
    fn explored(&self) -> usize;
}
