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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use std::fmt::Debug;
use std::ops::Add;

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a variable from the optimization problem at hand.
/// In this case, each variable is assumed to be identified with an integer
/// ranging from 0 until `problem.nb_variables()`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use diderot::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(1, Variable(1).id());
    /// assert_eq!(2, Variable(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes a decision that was made during the search. It affects a given
/// `value` (taken from the problem's domain type) to the specified `variable`.
/// Any given `Decision` should be understood as ```[[ variable = value ]]```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Decision<D> {
    pub variable : Variable,
    pub value    : D
}

// ----------------------------------------------------------------------------
// --- OBJECTIVE --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The numeric type used to measure the objective function. The engine only
/// ever maximizes, and combines the contributions of the successive decisions
/// with an addition. Hence, an objective value must be ordered, support the
/// addition, and have a neutral element (`zero`) as well as sentinels standing
/// for minus infinity (used to initialize the incumbent) and plus infinity
/// (the upper bound of the root problem).
pub trait Objective: Copy + PartialOrd + Add<Output = Self> + Debug + Send + Sync + 'static {
    /// The neutral element of the addition (value of an empty path).
    fn zero() -> Self;
    /// A value which is smaller than or equal to any other value.
    fn neg_infinity() -> Self;
    /// A value which is greater than or equal to any other value.
    fn infinity() -> Self;
}

macro_rules! integer_objective {
    ($($t:ty),*) => {
        $(
        impl Objective for $t {
            #[inline] fn zero() -> Self { 0 }
            #[inline] fn neg_infinity() -> Self { <$t>::MIN }
            #[inline] fn infinity() -> Self { <$t>::MAX }
        }
        )*
    };
}
macro_rules! float_objective {
    ($($t:ty),*) => {
        $(
        impl Objective for $t {
            #[inline] fn zero() -> Self { 0.0 }
            #[inline] fn neg_infinity() -> Self { <$t>::NEG_INFINITY }
            #[inline] fn infinity() -> Self { <$t>::INFINITY }
        }
        )*
    };
}
integer_objective!(i8, i16, i32, i64, i128, isize);
float_objective!(f32, f64);

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A feasible solution: one decision for each variable of the problem (sorted
/// by increasing variable id) along with the objective value it achieves.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<D, V> {
    pub decisions: Vec<Decision<D>>,
    pub value: V,
}

// ----------------------------------------------------------------------------
// --- SUBPROBLEM -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A subproblem is a residual problem that must be solved in order to complete
/// the resolution of the original problem which had been defined.
///
/// # Note:
/// Subproblems are automatically instantiated from nodes in the exact cutsets
/// of relaxed decision diagrams. If you are only discovering the API, rest
/// assured.. you don't need to create any subproblem yourself.
#[derive(Debug, Clone, PartialEq)]
pub struct SubProblem<S, D, V> {
    /// The root state of this sub problem
    pub state: S,
    /// The objective value accumulated along `path`
    pub value: V,
    /// The decisions to take to reach this subproblem from the root
    /// of the original problem
    pub path: Vec<Decision<D>>,
    /// An upper bound on the objective reachable in this subproblem
    pub ub: V,
    /// The depth of the subproblem with respect to the root problem
    pub depth: usize,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a branch-and-bound resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion<V> {
    /// is the given solution exact (proved optimal for the given problem)?
    /// or is it an approximation (the search was interrupted) ?
    pub is_exact: bool,
    /// if present the value of the best solution that was found
    pub best_value: Option<V>,
}

/// Everything that can go wrong when compiling a decision diagram, extracting
/// its longest path or running the branch-and-bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No path of the diagram reaches a complete assignment of the variables
    #[error("the instance is infeasible: no path reaches the terminal layer")]
    Infeasible,
    /// A user supplied function (model, variable order, merge operator, ...)
    /// returned something that does not respect its documented contract.
    #[error("contract violation: {0}")]
    ContractViolation(String),
    /// The diagram is missing some layers.
    #[error("the diagram is not built: it has {layers} layers out of {expected}")]
    NotBuilt { layers: usize, expected: usize },
    /// The search was interrupted before any feasible solution was found.
    #[error("the search was interrupted before any solution was found")]
    Interrupted,
}

impl Error {
    /// Convenience constructor for contract violations.
    pub fn contract<M: Into<String>>(msg: M) -> Self {
        Error::ContractViolation(msg.into())
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
