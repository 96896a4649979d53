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

//! A layer of a decision diagram maps each of its (user defined) states onto
//! the node meta data.

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{Node, Objective};

/// Represents a 'layer' in the decision diagram.
///
/// The nodes are kept in the order they were first encountered (this is what
/// makes the tie-breaking policies deterministic) and an index keyed on the
/// states guarantees that a state appears at most once in the layer.
#[derive(Debug, Clone)]
pub struct Layer<S, D, V> {
    nodes: Vec<(S, Node<S, D, V>)>,
    index: FxHashMap<S, usize>,
    /// True iff no node of this layer was dropped or merged by a processing
    exact: bool,
}

impl<S, D, V> Default for Layer<S, D, V>
where
    S: Clone + Eq + Hash,
    V: Objective,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D, V> Layer<S, D, V>
where
    S: Clone + Eq + Hash,
    V: Objective,
{
    /// Creates an empty exact layer
    pub fn new() -> Self {
        Self { nodes: vec![], index: Default::default(), exact: true }
    }
    /// Creates the layer holding only the root node of a diagram
    pub fn root(state: S) -> Self {
        let mut layer = Self::new();
        layer.offer(state, Node::root());
        layer
    }
    /// Rebuilds a layer out of a collection of (state, node) pairs. When the
    /// same state appears more than once, the pairs are combined as `offer`
    /// would do.
    pub fn from_nodes<I>(nodes: I, exact: bool) -> Self
    where
        I: IntoIterator<Item = (S, Node<S, D, V>)>,
    {
        let mut layer = Self::new();
        for (state, node) in nodes {
            layer.offer(state, node);
        }
        layer.exact = exact;
        layer
    }
    /// Consumes the layer and returns its nodes in first-encountered order
    pub fn into_nodes(self) -> Vec<(S, Node<S, D, V>)> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn is_exact(&self) -> bool {
        self.exact
    }
    pub fn set_exact(&mut self, exact: bool) {
        self.exact = exact;
    }

    /// Returns the node associated with the given state (if any)
    pub fn get(&self, state: &S) -> Option<&Node<S, D, V>> {
        self.index.get(state).map(|i| &self.nodes[*i].1)
    }
    /// Iterates over the (state, node) pairs in first-encountered order
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Node<S, D, V>)> {
        self.nodes.iter().map(|(s, n)| (s, n))
    }
    pub(crate) fn node_mut(&mut self, position: usize) -> &mut Node<S, D, V> {
        &mut self.nodes[position].1
    }

    /// This is one step of the longest path dynamic program. It inserts the
    /// `node` for `state` when that state is not yet part of the layer. When
    /// the state is already present, the stored distance, arc and exactness
    /// are replaced iff the new node has a strictly greater distance (ties
    /// are resolved in favor of the first-encountered node).
    ///
    /// Returns true iff the given node was stored.
    pub fn offer(&mut self, state: S, node: Node<S, D, V>) -> bool {
        if let Some(pos) = self.index.get(&state).copied() {
            let current = &mut self.nodes[pos].1;
            if node.distance > current.distance {
                current.distance = node.distance;
                current.arc = node.arc;
                current.exact = node.exact;
                true
            } else {
                false
            }
        } else {
            self.index.insert(state.clone(), self.nodes.len());
            self.nodes.push((state, node));
            true
        }
    }

    /// Returns the node having the greatest distance (the first one in case
    /// of ties), or None when the layer is empty.
    pub fn best(&self) -> Option<(&S, &Node<S, D, V>)> {
        Self::best_of(self.iter())
    }
    /// Returns the exact node having the greatest distance, if any.
    pub fn best_exact(&self) -> Option<(&S, &Node<S, D, V>)> {
        Self::best_of(self.iter().filter(|(_, n)| n.exact))
    }
    fn best_of<'a, I>(nodes: I) -> Option<(&'a S, &'a Node<S, D, V>)>
    where
        I: Iterator<Item = (&'a S, &'a Node<S, D, V>)>,
    {
        nodes.fold(None, |best, candidate| match best {
            Some(b) if !(candidate.1.distance > b.1.distance) => Some(b),
            _ => Some(candidate),
        })
    }

    /// Collapses this layer into its single best node.
    pub(crate) fn collapse(&mut self) {
        if self.nodes.len() > 1 {
            let best = self.best().map(|(s, _)| s.clone());
            if let Some(state) = best {
                let pos = self.index[&state];
                let kept = self.nodes.swap_remove(pos);
                self.nodes.clear();
                self.index.clear();
                self.index.insert(kept.0.clone(), 0);
                self.nodes.push(kept);
            }
        }
    }
}

#[cfg(test)]
mod test_layer {
    use crate::{Arc, Decision, Layer, Node, Variable};

    fn arc(tail: char, value: isize) -> Option<Arc<char, isize, isize>> {
        Some(Arc::new(tail, Decision { variable: Variable(0), value: 1 }, value))
    }

    #[test]
    fn root_layer_has_one_exact_node() {
        let layer = Layer::<char, isize, isize>::root('r');
        assert_eq!(1, layer.len());
        assert!(layer.is_exact());
        assert_eq!(Some(&Node::root()), layer.get(&'r'));
    }
    #[test]
    fn by_default_a_layer_is_empty_and_exact() {
        let layer = Layer::<char, isize, isize>::default();
        assert!(layer.is_empty());
        assert!(layer.is_exact());
        assert!(layer.best().is_none());
    }
    #[test]
    fn offer_inserts_unknown_states() {
        let mut layer = Layer::new();
        assert!(layer.offer('a', Node::new(3, arc('r', 3), true)));
        assert!(layer.offer('b', Node::new(5, arc('r', 5), true)));
        assert_eq!(2, layer.len());
        assert_eq!(vec!['a', 'b'], layer.iter().map(|(s, _)| *s).collect::<Vec<_>>());
    }
    #[test]
    fn offer_keeps_the_longest_path_and_its_exactness() {
        let mut layer = Layer::new();
        layer.offer('a', Node::new(3, arc('x', 3), true));
        assert!(layer.offer('a', Node::new(7, arc('y', 7), false)));
        let node = layer.get(&'a').unwrap();
        assert_eq!(7, node.distance);
        assert_eq!('y', node.arc.as_ref().unwrap().tail);
        assert!(!node.exact);
    }
    #[test]
    fn offer_ignores_shorter_paths() {
        let mut layer = Layer::new();
        layer.offer('a', Node::new(7, arc('x', 7), true));
        assert!(!layer.offer('a', Node::new(3, arc('y', 3), false)));
        let node = layer.get(&'a').unwrap();
        assert_eq!(7, node.distance);
        assert!(node.exact);
    }
    #[test]
    fn on_ties_the_first_encountered_arc_survives_with_its_exactness() {
        let mut layer = Layer::new();
        layer.offer('a', Node::new(5, arc('x', 5), false));
        assert!(!layer.offer('a', Node::new(5, arc('y', 5), true)));
        let node = layer.get(&'a').unwrap();
        assert_eq!('x', node.arc.as_ref().unwrap().tail);
        assert!(!node.exact);
    }
    #[test]
    fn best_is_the_first_node_with_max_distance() {
        let mut layer = Layer::new();
        layer.offer('a', Node::new(1, arc('r', 1), true));
        layer.offer('b', Node::new(9, arc('r', 9), false));
        layer.offer('c', Node::new(9, arc('r', 9), true));
        assert_eq!(Some('b'), layer.best().map(|(s, _)| *s));
        assert_eq!(Some('c'), layer.best_exact().map(|(s, _)| *s));
    }
    #[test]
    fn collapse_keeps_the_best_node_only() {
        let mut layer = Layer::new();
        layer.offer('a', Node::new(1, arc('r', 1), true));
        layer.offer('b', Node::new(9, arc('r', 9), true));
        layer.offer('c', Node::new(4, arc('r', 4), true));
        layer.collapse();
        assert_eq!(1, layer.len());
        assert_eq!(9, layer.get(&'b').unwrap().distance);
        assert!(layer.get(&'a').is_none());
    }
    #[test]
    fn from_nodes_combines_duplicate_states() {
        let layer = Layer::from_nodes(vec![
            ('a', Node::new(1, arc('r', 1), true)),
            ('a', Node::new(6, arc('s', 6), false)),
            ('b', Node::new(2, arc('r', 2), true)),
        ], false);
        assert_eq!(2, layer.len());
        assert!(!layer.is_exact());
        assert_eq!(6, layer.get(&'a').unwrap().distance);
    }
    #[test]
    fn into_nodes_preserves_the_insertion_order() {
        let mut layer = Layer::new();
        layer.offer('z', Node::new(1, arc('r', 1), true));
        layer.offer('a', Node::new(2, arc('r', 2), true));
        let states: Vec<char> = layer.into_nodes().into_iter().map(|(s, _)| s).collect();
        assert_eq!(vec!['z', 'a'], states);
    }
}
