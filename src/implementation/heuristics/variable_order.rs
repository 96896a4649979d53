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

//! This module provides the implementation of the default variable order.

use crate::{Diagram, Problem, Variable, VariableOrder};

/// _This is the default variable order._ It assigns the variables in their
/// natural order: the next variable to branch on is always the one having
/// the smallest id which is neither fixed by the partial solution leading to
/// the root of the diagram, nor already assigned by one of its layers.
#[derive(Debug, Default, Copy, Clone)]
pub struct NaturalOrder;

impl<P: Problem + ?Sized> VariableOrder<P> for NaturalOrder {
    fn next_variable(&self, _: &P, diagram: &Diagram<P::State, P::Domain, P::Value>) -> Option<Variable> {
        (0..diagram.nb_variables()).map(Variable).find(|v| !diagram.is_assigned(*v))
    }
}
