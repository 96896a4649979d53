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

//! This module provides the implementation of the layer processings which
//! bound the width of the diagrams: `Restrict` drops the least promising
//! nodes of a layer while `Relax` merges them.

use std::hash::Hash;

use crate::{ByDistance, Error, Layer, LayerProcessing, Node, NodeRanking, Objective, Relaxation};
use crate::implementation::mdd::compare_values;

/// _This is the default layer processing._ It leaves all layers untouched
/// which means that the compiled diagrams are exact.
#[derive(Debug, Default, Copy, Clone)]
pub struct Identity;
impl<S, D, V> LayerProcessing<S, D, V> for Identity {
    fn process(&self, _: usize, layer: Layer<S, D, V>) -> Result<Layer<S, D, V>, Error> {
        Ok(layer)
    }
}

/// Sorts the nodes from the most to the least promising. This sort is stable
/// so equivalent nodes remain in the order they were encountered.
fn sort_best_first<S, D, V, X>(ranking: &X, nodes: &mut [(S, Node<S, D, V>)])
where X: NodeRanking<S, D, V>
{
    nodes.sort_by(|a, b| ranking.compare((&b.0, &b.1), (&a.0, &a.1)));
}

/// A restriction keeps at most `max_width` nodes in each layer. The dropped
/// nodes are the least promising ones according to the node ranking (by
/// default, the nodes having the shortest distance from the root are
/// dropped first). A restricted diagram is an under approximation of the
/// exact one: all its paths are feasible solutions.
///
/// A maximum width of zero is handled as if it were one.
#[derive(Debug, Clone, Copy)]
pub struct Restrict<X = ByDistance> {
    max_width: usize,
    ranking: X,
}
impl Restrict<ByDistance> {
    pub fn new(max_width: usize) -> Self {
        Self { max_width, ranking: ByDistance }
    }
}
impl<X> Restrict<X> {
    /// Creates a restriction that ranks the nodes with a custom `ranking`.
    pub fn with_ranking(max_width: usize, ranking: X) -> Self {
        Self { max_width, ranking }
    }
    pub fn max_width(&self) -> usize {
        self.max_width.max(1)
    }
}
impl<S, D, V, X> LayerProcessing<S, D, V> for Restrict<X>
where
    S: Clone + Eq + Hash,
    V: Objective,
    X: NodeRanking<S, D, V>,
{
    fn process(&self, _: usize, layer: Layer<S, D, V>) -> Result<Layer<S, D, V>, Error> {
        let width = self.max_width();
        if layer.len() <= width {
            return Ok(layer);
        }
        let mut nodes = layer.into_nodes();
        sort_best_first(&self.ranking, &mut nodes);
        nodes.truncate(width);
        Ok(Layer::from_nodes(nodes, false))
    }
}

/// A relaxation keeps at most `max_width` nodes in each layer. When a layer
/// is too wide, the `max_width - 1` most promising nodes are kept as is and
/// all the others are merged into one single inexact node. The state of that
/// node is computed by the `Relaxation`, its distance is the longest of the
/// merged distances (and its incoming arc is the one achieving it).
/// A relaxed diagram is an over approximation of the exact one: its longest
/// path is an upper bound on the optimum.
///
/// The first layer below the root of a diagram is never relaxed. Hence, the
/// exact cutset of a relaxed diagram never comprises its root.
///
/// A maximum width of zero is handled as if it were one.
#[derive(Debug, Clone, Copy)]
pub struct Relax<R, X = ByDistance> {
    max_width: usize,
    relaxation: R,
    ranking: X,
}
impl<R> Relax<R, ByDistance> {
    pub fn new(max_width: usize, relaxation: R) -> Self {
        Self { max_width, relaxation, ranking: ByDistance }
    }
}
impl<R, X> Relax<R, X> {
    /// Creates a relaxation that ranks the nodes with a custom `ranking`.
    pub fn with_ranking(max_width: usize, relaxation: R, ranking: X) -> Self {
        Self { max_width, relaxation, ranking }
    }
    pub fn max_width(&self) -> usize {
        self.max_width.max(1)
    }
}
impl<S, D, V, R, X> LayerProcessing<S, D, V> for Relax<R, X>
where
    S: Clone + Eq + Hash,
    D: Clone,
    V: Objective,
    R: Relaxation<State = S>,
    X: NodeRanking<S, D, V>,
{
    fn process(&self, depth: usize, layer: Layer<S, D, V>) -> Result<Layer<S, D, V>, Error> {
        let width = self.max_width();
        if depth <= 1 || layer.len() <= width {
            return Ok(layer);
        }
        let mut nodes = layer.into_nodes();
        sort_best_first(&self.ranking, &mut nodes);
        let merged = nodes.split_off(width - 1);

        let state = self.relaxation.merge(&mut merged.iter().map(|(s, _)| s))?;
        let best = merged.iter()
            .map(|(_, n)| n)
            .reduce(|best, n| if compare_values(&n.distance, &best.distance).is_gt() { n } else { best })
            .ok_or_else(|| Error::contract("nothing to merge"))?;
        let node = Node::new(best.distance, best.arc.clone(), false);

        let mut relaxed = Layer::from_nodes(nodes, false);
        relaxed.offer(state, node);
        Ok(relaxed)
    }
}
