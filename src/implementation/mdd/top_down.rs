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

//! Top down compilation of a layered decision diagram. The longest path
//! dynamic program is carried out while the layers are being expanded.

use log::trace;

use crate::{Diagram, Error, Layer, LayerProcessing, Node, Problem, VariableOrder};

/// Builds all the missing layers of `diagram`.
///
/// Each new layer is obtained by expanding all the nodes of the current last
/// layer along the variable picked by `order`. Whenever several arcs reach
/// the same state, only the one yielding the longest path is kept (the first
/// one in case of ties). The expanded layer is then handed to `processing`
/// before it gets appended to the diagram. Once all variables are assigned,
/// the last layer is collapsed into a single terminal node.
///
/// This function also marks the exact nodes belonging to the frontier
/// cutset of the diagram (see `CutsetType::Frontier`).
pub fn top_down<P>(
    diagram: &mut Diagram<P::State, P::Domain, P::Value>,
    problem: &P,
    order: &dyn VariableOrder<P>,
    processing: &dyn LayerProcessing<P::State, P::Domain, P::Value>,
) -> Result<(), Error>
where
    P: Problem + ?Sized,
{
    while !diagram.is_built() {
        let variable = order.next_variable(problem, diagram)
            .ok_or_else(|| Error::contract("no variable to branch on while the diagram is incomplete"))?;
        if variable.id() >= diagram.nb_variables() {
            return Err(Error::contract(format!("{:?} is out of range", variable)));
        }
        if diagram.is_assigned(variable) {
            return Err(Error::contract(format!("{:?} is already assigned", variable)));
        }

        let depth = diagram.layers().len();
        let current = diagram.last_layer();
        let layer_exact = current.is_exact();

        let mut next = Layer::new();
        let mut successors = vec![];
        for (position, (state, node)) in current.iter().enumerate() {
            for (arc, dest) in problem.transitions(state, variable) {
                if arc.decision.variable != variable {
                    return Err(Error::contract(format!(
                        "a transition for {:?} bears on {:?}", variable, arc.decision.variable)));
                }
                if arc.tail != *state {
                    return Err(Error::contract("a transition does not originate from the expanded state"));
                }
                let distance = node.distance + arc.value;
                let exact = node.exact && layer_exact;
                if node.exact {
                    successors.push((position, dest.clone()));
                }
                next.offer(dest, Node::new(distance, Some(arc), exact));
            }
        }

        let width = next.len();
        let next = processing.process(depth, next)?;
        trace!("layer {} on {:?}: {} nodes expanded, {} kept, exact: {}",
            depth, variable, width, next.len(), next.is_exact());

        let current = diagram.last_layer_mut();
        for (position, dest) in successors {
            let lost = next.get(&dest).map_or(true, |n| !n.exact);
            if lost {
                current.node_mut(position).frontier = true;
            }
        }
        diagram.push_layer(variable, next);
    }
    diagram.finalize();
    Ok(())
}

#[cfg(test)]
mod test_top_down {
    use test_log::test;

    use crate::*;
    use crate::test_utils::*;

    #[test]
    fn builds_one_layer_per_free_variable() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        assert!(dd.is_built());
        assert_eq!(4, dd.layers().len());
        assert_eq!(&[Variable(0), Variable(1), Variable(2)], dd.variables());
    }
    #[test]
    fn exact_compilation_computes_the_longest_path() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        assert!(dd.is_exact());
        assert_eq!(Some(6), dd.terminal().map(|(_, n)| n.distance));
    }
    #[test]
    fn the_terminal_layer_is_collapsed() {
        let pb = knapsack_3_items();
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        assert_eq!(1, dd.last_layer().len());
        assert_eq!(Some(220), dd.terminal().map(|(_, n)| n.distance));
    }
    #[test]
    fn an_exact_diagram_has_no_frontier_node() {
        let pb = knapsack_3_items();
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        let marked = dd.layers().iter()
            .flat_map(|l| l.iter())
            .filter(|(_, n)| n.is_frontier())
            .count();
        assert_eq!(0, marked);
    }
    #[test]
    fn restriction_marks_the_parents_of_dropped_nodes() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Restrict::new(1)).unwrap();
        assert!(!dd.is_exact());
        // the root keeps its best child only: the other one is lost
        assert!(dd.layers()[0].get(&pb.initial_state()).unwrap().is_frontier());
        assert_eq!(Some(6), dd.terminal().map(|(_, n)| n.distance));
    }
    #[test]
    fn a_zero_variable_diagram_is_its_own_terminal() {
        let pb = ZeroVariables;
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        assert_eq!(1, dd.layers().len());
        assert_eq!(Some(0), dd.terminal().map(|(_, n)| n.distance));
        let sol = dd.best_exact_solution().unwrap().unwrap();
        assert!(sol.decisions.is_empty());
    }
    #[test]
    fn an_infeasible_problem_yields_an_empty_terminal_layer() {
        let pb = Infeasible { n: 3 };
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        assert!(dd.is_built());
        assert!(dd.last_layer().is_empty());
        assert!(dd.terminal().is_none());
    }
    #[test]
    fn rebuilding_a_complete_diagram_is_a_noop() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        top_down(&mut dd, &pb, &NaturalOrder, &Identity).unwrap();
        assert_eq!(4, dd.layers().len());
        assert_eq!(Some(6), dd.best_exact_solution().unwrap().map(|s| s.value));
    }

    struct AlwaysFirst;
    impl<P: Problem> VariableOrder<P> for AlwaysFirst {
        fn next_variable(&self, _: &P, _: &Diagram<P::State, P::Domain, P::Value>) -> Option<Variable> {
            Some(Variable(0))
        }
    }
    struct NeverAny;
    impl<P: Problem> VariableOrder<P> for NeverAny {
        fn next_variable(&self, _: &P, _: &Diagram<P::State, P::Domain, P::Value>) -> Option<Variable> {
            None
        }
    }
    struct OutOfRange;
    impl<P: Problem> VariableOrder<P> for OutOfRange {
        fn next_variable(&self, problem: &P, _: &Diagram<P::State, P::Domain, P::Value>) -> Option<Variable> {
            Some(Variable(problem.nb_variables()))
        }
    }

    #[test]
    fn a_variable_cannot_be_assigned_twice() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        let res = top_down(&mut dd, &pb, &AlwaysFirst, &Identity);
        assert!(matches!(res, Err(Error::ContractViolation(_))));
    }
    #[test]
    fn the_order_must_provide_a_variable_until_the_diagram_is_complete() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        let res = top_down(&mut dd, &pb, &NeverAny, &Identity);
        assert!(matches!(res, Err(Error::ContractViolation(_))));
    }
    #[test]
    fn the_order_must_provide_a_variable_in_range() {
        let pb = BinarySum::new(vec![1, 2, 3]);
        let mut dd = Diagram::new(&pb);
        let res = top_down(&mut dd, &pb, &OutOfRange, &Identity);
        assert!(matches!(res, Err(Error::ContractViolation(_))));
    }

    struct Liar;
    impl Problem for Liar {
        type State = usize;
        type Domain = isize;
        type Value = isize;

        fn nb_variables(&self) -> usize { 2 }
        fn initial_state(&self) -> usize { 0 }
        fn transitions(&self, state: &usize, _: Variable) -> Transitions<usize, isize, isize> {
            let decision = Decision { variable: Variable(1), value: 1 };
            vec![(Arc::new(*state, decision, 1), state + 1)]
        }
    }
    #[test]
    fn a_transition_must_bear_on_the_requested_variable() {
        let mut dd = Diagram::new(&Liar);
        let res = top_down(&mut dd, &Liar, &NaturalOrder, &Identity);
        assert!(matches!(res, Err(Error::ContractViolation(_))));
    }
}
