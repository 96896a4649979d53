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

//! The exact cutsets of a compiled diagram. The nodes of an exact cutset are
//! turned into the subproblems that the branch-and-bound still has to explore.

use std::hash::Hash;

use crate::{Diagram, Error, Node, Objective, SubProblem};

/// How the exact cutset of a relaxed diagram is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutsetType {
    /// All the exact nodes having at least one successor which is either
    /// inexact or was discarded while processing the next layer. This cutset
    /// contains at most as many nodes as the last exact layer and it is
    /// usually much smaller.
    #[default]
    Frontier,
    /// All the nodes of the deepest layer such that this layer and all the
    /// layers above it are exact.
    LastExactLayer,
}

impl<S, D, V> Diagram<S, D, V>
where
    S: Clone + Eq + Hash,
    D: Clone,
    V: Objective,
{
    /// Turns the nodes of the exact cutset of this (built) diagram into
    /// subproblems. Each subproblem is reached by the partial solution of this
    /// diagram extended with the longest path to the cutset node, and it is
    /// bounded by `ub`.
    ///
    /// An exact diagram has an empty cutset. A cutset comprising the root of
    /// the diagram is reported as a contract violation as it would not let
    /// the search progress.
    pub fn exact_cutset(&self, kind: CutsetType, ub: V) -> Result<Vec<SubProblem<S, D, V>>, Error> {
        if !self.is_built() {
            return Err(Error::NotBuilt { layers: self.layers().len(), expected: self.expected_layers() });
        }
        if self.is_exact() {
            return Ok(vec![]);
        }

        let mut cutset = vec![];
        match kind {
            CutsetType::Frontier => {
                let last = self.layers().len() - 1;
                for (depth, layer) in self.layers()[..last].iter().enumerate() {
                    for (state, node) in layer.iter().filter(|(_, n)| n.exact && n.is_frontier()) {
                        cutset.push(self.subproblem(depth, state, node, ub)?);
                    }
                }
            },
            CutsetType::LastExactLayer => {
                let depth = self.layers().iter().take_while(|l| l.is_exact()).count() - 1;
                for (state, node) in self.layers()[depth].iter() {
                    cutset.push(self.subproblem(depth, state, node, ub)?);
                }
            },
        }
        Ok(cutset)
    }

    fn subproblem(&self, depth: usize, state: &S, node: &Node<S, D, V>, ub: V)
        -> Result<SubProblem<S, D, V>, Error>
    {
        if depth == 0 {
            return Err(Error::contract("the exact cutset contains the root of the diagram"));
        }
        let mut path = self.partial_sol().to_vec();
        path.extend(self.path_to(depth, node)?);
        Ok(SubProblem {
            state: state.clone(),
            value: self.partial_value() + node.distance,
            depth: path.len(),
            path,
            ub,
        })
    }
}
