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

//! Extraction of the longest path of a compiled diagram.

use std::hash::Hash;

use crate::{Diagram, Error, Objective, Solution};

/// Returns the solution which corresponds to the longest path from the root
/// to the terminal node of a completely built `diagram`. The decisions of the
/// solution cover all the variables of the problem (including those of the
/// partial solution that lead to the root of the diagram) and are sorted by
/// increasing variable id.
///
/// # Errors
/// * `NotBuilt` when some variables have not been assigned yet,
/// * `Infeasible` when no path reaches the terminal layer.
pub fn longest_path<S, D, V>(diagram: &Diagram<S, D, V>) -> Result<Solution<D, V>, Error>
where
    S: Clone + Eq + Hash,
    D: Clone,
    V: Objective,
{
    if !diagram.is_built() {
        return Err(Error::NotBuilt {
            layers: diagram.layers().len(),
            expected: diagram.expected_layers(),
        });
    }
    let (_, terminal) = diagram.last_layer().best().ok_or(Error::Infeasible)?;
    diagram.solution_through(diagram.layers().len() - 1, terminal)
}
