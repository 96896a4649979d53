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

//! The layered decision diagram itself.

use std::hash::Hash;

use crate::{Decision, Error, Layer, Node, Objective, Problem, Solution, SubProblem, Variable};

/// A (multi-valued) decision diagram.
///
/// It is a directed acyclic graph where the nodes represent (feasible) states
/// and the arcs stand for the transitions triggered by the assignment of a
/// variable. Decisions are made sequentially and arcs only connect consecutive
/// layers. The initial layer contains the single root node and, once the
/// diagram has been built, the last layer is collapsed to one terminal node.
///
/// As the variable order can be decided dynamically, the variable assigned by
/// each layer is remembered as well. A diagram compiled for a subproblem also
/// remembers the partial solution (and its value) leading to its root. A
/// diagram which assigns the `k` free variables of its root has `k+1` layers.
#[derive(Debug, Clone)]
pub struct Diagram<S, D, V> {
    /// The layers of the diagram; layer 0 holds the root
    layers: Vec<Layer<S, D, V>>,
    /// The variable assigned by the arcs entering layer `i+1`
    variables: Vec<Variable>,
    /// The decisions fixed outside of this diagram
    partial_sol: Vec<Decision<D>>,
    /// The objective value of the partial solution
    partial_value: V,
    /// assigned[v] is true iff variable v is decided by partial_sol or a layer
    assigned: Vec<bool>,
    /// The best exact node of the last layer (before it was collapsed)
    exact_terminal: Option<(S, Node<S, D, V>)>,
    /// Set once the terminal layer has been collapsed
    finalized: bool,
}

impl<S, D, V> Diagram<S, D, V>
where
    S: Clone + Eq + Hash,
    D: Clone,
    V: Objective,
{
    /// Creates the diagram for the complete problem: it only contains the
    /// root layer, holding the initial state of the problem.
    pub fn new<P>(problem: &P) -> Self
    where P: Problem<State = S, Domain = D, Value = V> + ?Sized
    {
        Self {
            layers: vec![Layer::root(problem.initial_state())],
            variables: vec![],
            partial_sol: vec![],
            partial_value: V::zero(),
            assigned: vec![false; problem.nb_variables()],
            exact_terminal: None,
            finalized: false,
        }
    }
    /// Creates the diagram rooted in the state of the given subproblem.
    pub fn for_subproblem<P>(problem: &P, sub: &SubProblem<S, D, V>) -> Result<Self, Error>
    where P: Problem<State = S, Domain = D, Value = V> + ?Sized
    {
        Self::with_root(problem.nb_variables(), sub.state.clone(), sub.path.clone(), sub.value)
    }
    /// Creates a diagram for a problem having `nb_variables` variables whose
    /// root node is `state`, reached with the decisions of `partial_sol`
    /// which are worth `partial_value`.
    pub fn with_root(nb_variables: usize, state: S, partial_sol: Vec<Decision<D>>, partial_value: V)
        -> Result<Self, Error>
    {
        let mut assigned = vec![false; nb_variables];
        for d in partial_sol.iter() {
            let id = d.variable.id();
            if id >= nb_variables || assigned[id] {
                return Err(Error::contract(format!(
                    "the partial solution assigns {:?} which is out of range or assigned twice", d.variable)));
            }
            assigned[id] = true;
        }
        Ok(Self {
            layers: vec![Layer::root(state)],
            variables: vec![],
            partial_sol,
            partial_value,
            assigned,
            exact_terminal: None,
            finalized: false,
        })
    }

    // ------------------------------------------------------------------------
    // --- Querying the diagram -----------------------------------------------
    // ------------------------------------------------------------------------
    pub fn layers(&self) -> &[Layer<S, D, V>] {
        &self.layers
    }
    /// The last layer which has been built so far
    pub fn last_layer(&self) -> &Layer<S, D, V> {
        &self.layers[self.layers.len() - 1]
    }
    /// The variables assigned by the layers (in the order they were chosen)
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
    pub fn partial_sol(&self) -> &[Decision<D>] {
        &self.partial_sol
    }
    pub fn partial_value(&self) -> V {
        self.partial_value
    }
    /// The total number of variables of the problem
    pub fn nb_variables(&self) -> usize {
        self.assigned.len()
    }
    /// The number of variables that are not fixed by the partial solution
    pub fn nb_free_variables(&self) -> usize {
        self.assigned.len() - self.partial_sol.len()
    }
    /// The number of layers a complete diagram has
    pub fn expected_layers(&self) -> usize {
        self.nb_free_variables() + 1
    }
    /// Returns true iff all the free variables are assigned by some layer
    pub fn is_built(&self) -> bool {
        self.layers.len() == self.expected_layers()
    }
    /// Returns true iff the variable is fixed either by the partial solution
    /// or by one of the layers of this diagram
    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.assigned.get(variable.id()).copied().unwrap_or(false)
    }
    /// Returns true iff no layer has ever been restricted or relaxed
    pub fn is_exact(&self) -> bool {
        self.layers.iter().all(|l| l.is_exact())
    }
    /// Returns the terminal node (None if the diagram is not built or when
    /// no path reaches the terminal layer)
    pub fn terminal(&self) -> Option<(&S, &Node<S, D, V>)> {
        if self.is_built() {
            self.last_layer().best()
        } else {
            None
        }
    }

    /// Walks the chain of incoming arcs from `node` (which is located in
    /// layer `depth`) back to the root and returns the decisions made along
    /// that path, in the order they were made.
    pub fn path_to(&self, depth: usize, node: &Node<S, D, V>) -> Result<Vec<Decision<D>>, Error> {
        let mut path = Vec::with_capacity(depth);
        let mut layer = depth;
        let mut current = node;
        while let Some(arc) = current.arc.as_ref() {
            path.push(arc.decision.clone());
            layer = layer.checked_sub(1)
                .ok_or_else(|| Error::contract("the root node has an incoming arc"))?;
            current = self.layers[layer].get(&arc.tail)
                .ok_or_else(|| Error::contract("an arc originates from a state that is absent from its layer"))?;
        }
        path.reverse();
        Ok(path)
    }
    /// The complete solution (partial solution + path to the given node)
    /// reached when following the longest path to `node`.
    pub(crate) fn solution_through(&self, depth: usize, node: &Node<S, D, V>) -> Result<Solution<D, V>, Error> {
        let mut decisions = self.partial_sol.clone();
        decisions.extend(self.path_to(depth, node)?);
        decisions.sort_by_key(|d| d.variable);
        Ok(Solution { decisions, value: self.partial_value + node.distance })
    }
    /// Returns the feasible solution corresponding to the best exact node of
    /// the terminal layer, if there was such a node.
    pub fn best_exact_solution(&self) -> Result<Option<Solution<D, V>>, Error> {
        match self.exact_terminal.as_ref() {
            Some((_, node)) if self.finalized => {
                self.solution_through(self.layers.len() - 1, node).map(Some)
            },
            _ => Ok(None),
        }
    }

    // ------------------------------------------------------------------------
    // --- Building the diagram -----------------------------------------------
    // ------------------------------------------------------------------------
    pub(crate) fn last_layer_mut(&mut self) -> &mut Layer<S, D, V> {
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }
    /// Appends the layer assigning `variable`
    pub(crate) fn push_layer(&mut self, variable: Variable, layer: Layer<S, D, V>) {
        self.assigned[variable.id()] = true;
        self.variables.push(variable);
        self.layers.push(layer);
    }
    /// Remembers the best exact terminal node and collapses the last layer
    /// into one single terminal node.
    pub(crate) fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        self.exact_terminal = self.last_layer().best_exact().map(|(s, n)| (s.clone(), n.clone()));
        self.last_layer_mut().collapse();
    }
}
