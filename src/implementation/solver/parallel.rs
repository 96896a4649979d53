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

//! This module provides the implementation of a parallel branch-and-bound
//! solver. That is a solver that will solve the problem using as many threads
//! as requested. By default, it uses as many threads as the number of hardware
//! threads available on the machine.
use derive_builder::Builder;
use log::{debug, info};
use parking_lot::{Condvar, Mutex};

use crate::{Completion, Cutoff, CutsetType, Diagram, Error, Incumbent, LayerProcessing, MaxUB, NaturalOrder, NoCutoff, Objective, Problem, SimpleFringe, Solution, Solver, SubProblem, VariableOrder, longest_path, top_down};

/// The shared data that may only be manipulated within critical sections
struct Critical<S, D, V: Objective> {
    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    ///
    /// # Note:
    /// This fringe orders the nodes by upper bound (so the highest ub is going
    /// to pop first). So, it is guaranteed that the upper bound of the first
    /// node being popped is an upper bound on the value reachable by exploring
    /// any of the nodes remaining on the fringe. As a consequence, the
    /// exploration can be stopped as soon as a node with an ub <= current best
    /// lower bound is popped.
    fringe: SimpleFringe<S, D, V, MaxUB>,
    /// This is the number of nodes that are currently being explored.
    ///
    /// # Note
    /// This is the piece of information that lets us distinguish between a
    /// node-starvation and the completion of the problem resolution.
    ongoing: usize,
    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored. That is, the number of nodes that have been popped from
    /// the fringe and whose diagrams have been compiled.
    explored: usize,
    /// Set when the cutoff interrupted the search
    interrupted: bool,
    /// The first error that was encountered by any of the workers
    error: Option<Error>,
}
impl<S, D, V: Objective> Critical<S, D, V> {
    fn must_abort(&self) -> bool {
        self.interrupted || self.error.is_some()
    }
}

/// The state which is shared among the many running threads: it provides an
/// access to the configuration of the solver, the critical data (protected by
/// a mutex) as well as a monitor (condvar) to park threads in case of
/// node-starvation.
struct Shared<'a, 'b, P: Problem> {
    solver: &'b BranchAndBound<'a, P>,
    critical: Mutex<Critical<P::State, P::Domain, P::Value>>,
    /// Threads facing an empty fringe wait on this monitor. Whenever a thread
    /// is done with a subproblem, it must wake-up all parked threads.
    monitor: Condvar,
}

/// The workload a thread can get from the shared state
enum WorkLoad<S, D, V> {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// The work must stop because of an external cutoff or an error
    Aborted,
    /// There is nothing you can do right now. Check again when you wake up
    Starvation,
    /// The item to process
    WorkItem { node: SubProblem<S, D, V> },
}

/// Why the processing of a subproblem did not complete
enum Reason {
    CutoffOccurred,
    Failure(Error),
}
impl From<Error> for Reason {
    fn from(e: Error) -> Self {
        Reason::Failure(e)
    }
}

/// This is the structure implementing a multi-threaded branch-and-bound
/// solver. Each subproblem popped from the fringe is first compiled as a
/// restricted diagram (yielding a feasible solution) and then as a relaxed
/// diagram (yielding an upper bound). When the bound cannot be pruned, the
/// exact cutset of the relaxed diagram is pushed onto the fringe.
///
/// It is configured with a `BranchAndBoundBuilder`.
///
/// # Example Usage
/// ```
/// # use diderot::*;
/// #
/// # struct Knapsack {
/// #     capacity: usize,
/// #     profit: Vec<isize>,
/// #     weight: Vec<usize>,
/// # }
/// # impl Problem for Knapsack {
/// #     type State = usize;
/// #     type Domain = isize;
/// #     type Value = isize;
/// #     fn nb_variables(&self) -> usize { self.profit.len() }
/// #     fn initial_state(&self) -> usize { self.capacity }
/// #     fn transitions(&self, state: &usize, variable: Variable) -> Transitions<usize, isize, isize> {
/// #         let i = variable.id();
/// #         let mut out = vec![(Arc::new(*state, Decision { variable, value: 0 }, 0), *state)];
/// #         if *state >= self.weight[i] {
/// #             out.push((Arc::new(*state, Decision { variable, value: 1 }, self.profit[i]), state - self.weight[i]));
/// #         }
/// #         out
/// #     }
/// # }
/// # struct KPRelax;
/// # impl Relaxation for KPRelax {
/// #     type State = usize;
/// #     fn merge(&self, states: &mut dyn Iterator<Item = &usize>) -> Result<usize, Error> {
/// #         states.max().copied().ok_or_else(|| Error::contract("nothing to merge"))
/// #     }
/// # }
/// // 1. Create an instance of our knapsack problem
/// let problem = Knapsack {
///     capacity: 50,
///     profit  : vec![60, 100, 120],
///     weight  : vec![10,  20,  30]
/// };
///
/// // 2. Decide how the restricted and relaxed diagrams are bounded
/// let restrict = Restrict::new(2);
/// let relax    = Relax::new(2, KPRelax);
///
/// // 3. Decide of a cutoff heuristic (if you don't want to let the solver run for ever)
/// let cutoff = NoCutoff; // might as well be a TimeBudget (or something else)
///
/// // 4. Instantiate your solver
/// let mut solver = BranchAndBoundBuilder::default()
///     .problem(&problem)
///     .restrict(&restrict)
///     .relax(&relax)
///     .cutoff(&cutoff)
///     .build()
///     .unwrap();
///
/// // 5. Maximize your objective function
/// let outcome = solver.maximize().unwrap();
/// assert!(outcome.is_exact);
/// assert_eq!(Some(220), outcome.best_value);
///
/// // 6. Do whatever you like with the optimal solution.
/// let solution = solver.best_solution().unwrap();
/// for decision in solution.decisions.iter() {
///     if decision.value == 1 {
///         println!("{}", decision.variable.id());
///     }
/// }
/// ```
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct BranchAndBound<'a, P: Problem> {
    /// A reference to the problem being solved
    problem: &'a P,
    /// The processing used to compile the restricted diagrams
    restrict: &'a (dyn LayerProcessing<P::State, P::Domain, P::Value> + Send + Sync),
    /// The processing used to compile the relaxed diagrams
    relax: &'a (dyn LayerProcessing<P::State, P::Domain, P::Value> + Send + Sync),
    /// The heuristic deciding what variable is assigned by each layer
    #[builder(default = "&NaturalOrder")]
    variable_order: &'a (dyn VariableOrder<P> + Send + Sync),
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    #[builder(default = "&NoCutoff")]
    cutoff: &'a (dyn Cutoff + Send + Sync),
    /// The kind of exact cutset used to branch on the relaxed diagrams
    #[builder(default)]
    cutset: CutsetType,
    /// This is a configuration parameter that tunes the number of threads that
    /// will be spawned to solve the problem. By default, this number amounts
    /// to the number of hardware threads available on the machine.
    #[builder(default = "num_cpus::get()")]
    nb_threads: usize,
    /// The best known solution
    #[builder(setter(skip))]
    incumbent: Incumbent<P::Domain, P::Value>,
    /// The number of subproblems explored during the last resolution
    #[builder(setter(skip))]
    explored: usize,
}

impl<'a, P> BranchAndBound<'a, P>
where
    P: Problem + Sync,
    P::State: Send + Sync,
    P::Domain: Send + Sync,
{
    /// Sets the number of threads used by the solver
    pub fn with_nb_threads(mut self, nb_threads: usize) -> Self {
        self.nb_threads = nb_threads;
        self
    }

    fn root_node(&self) -> SubProblem<P::State, P::Domain, P::Value> {
        SubProblem {
            state: self.problem.initial_state(),
            value: P::Value::zero(),
            path: vec![],
            ub: P::Value::infinity(),
            depth: 0,
        }
    }

    /// This method processes the given `node`. To do so, it reads the current
    /// best lower bound from the incumbent. Then it compiles a restricted
    /// and possibly a relaxed diagram rooted in `node`. If that is necessary,
    /// it stores cut-set nodes onto the fringe for further parallel processing.
    fn process_one_node(
        shared: &Shared<'a, '_, P>,
        node: SubProblem<P::State, P::Domain, P::Value>,
    ) -> Result<(), Reason> {
        let solver = shared.solver;
        let problem = solver.problem;

        if node.ub <= solver.incumbent.value() {
            return Ok(());
        }

        // 1. RESTRICTION
        let mut restricted = Diagram::for_subproblem(problem, &node)?;
        top_down(&mut restricted, problem, solver.variable_order, solver.restrict)?;
        match longest_path(&restricted) {
            Ok(sol) => {
                debug!("restricted diagram at depth {}: {:?}", node.depth, sol.value);
                solver.incumbent.offer(sol);
            },
            Err(Error::Infeasible) => debug!("restricted diagram at depth {}: infeasible", node.depth),
            Err(e) => return Err(e.into()),
        }
        if restricted.is_exact() {
            return Ok(());
        }
        if solver.cutoff.must_stop() {
            return Err(Reason::CutoffOccurred);
        }

        // 2. RELAXATION
        let mut relaxed = Diagram::for_subproblem(problem, &node)?;
        top_down(&mut relaxed, problem, solver.variable_order, solver.relax)?;
        let bound = match longest_path(&relaxed) {
            Ok(sol) => sol.value,
            Err(Error::Infeasible) => {
                debug!("relaxed diagram at depth {}: infeasible", node.depth);
                return Ok(());
            },
            Err(e) => return Err(e.into()),
        };
        if let Some(sol) = relaxed.best_exact_solution()? {
            solver.incumbent.offer(sol);
        }
        if relaxed.is_exact() {
            return Ok(());
        }

        let ub = if bound < node.ub { bound } else { node.ub };
        if ub <= solver.incumbent.value() {
            debug!("relaxed diagram at depth {}: pruned ({:?})", node.depth, ub);
            return Ok(());
        }
        let cutset = relaxed.exact_cutset(solver.cutset, ub)?;
        debug!("relaxed diagram at depth {}: bound {:?}, {} subproblems", node.depth, ub, cutset.len());
        Self::enqueue_cutset(shared, cutset);
        Ok(())
    }

    /// Adds the relevant nodes of the cutset to the shared fringe.
    fn enqueue_cutset(shared: &Shared<'a, '_, P>, cutset: Vec<SubProblem<P::State, P::Domain, P::Value>>) {
        let mut critical = shared.critical.lock();
        let best_lb = shared.solver.incumbent.value();
        for node in cutset {
            if node.ub > best_lb {
                critical.fringe.push(node);
            }
        }
    }
    /// Acknowledges that a thread finished processing its node.
    fn notify_node_finished(shared: &Shared<'a, '_, P>, outcome: Result<(), Reason>) {
        let mut critical = shared.critical.lock();
        critical.ongoing -= 1;
        match outcome {
            Ok(()) => {},
            Err(Reason::CutoffOccurred) => {
                critical.interrupted = true;
                critical.fringe.clear();
            },
            Err(Reason::Failure(e)) => {
                if critical.error.is_none() {
                    critical.error = Some(e);
                }
                critical.fringe.clear();
            },
        }
        shared.monitor.notify_all();
    }

    /// Consults the shared state to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the problem is solved and all threads should stop
    ///   + Aborted, when the search was interrupted or failed
    ///   + Starvation, when there is no subproblem available for processing
    ///     at the time being (but some subproblem are still being processed
    ///     and thus the problem cannot be considered solved).
    ///   + WorkItem, when the thread successfully obtained a subproblem to
    ///     process.
    fn get_workload(shared: &Shared<'a, '_, P>) -> WorkLoad<P::State, P::Domain, P::Value> {
        let mut critical = shared.critical.lock();

        // Are we done ?
        if critical.ongoing == 0 && critical.fringe.is_empty() {
            return WorkLoad::Complete;
        }

        // Do we need to stop
        if critical.must_abort() {
            return WorkLoad::Aborted;
        }
        if shared.solver.cutoff.must_stop() {
            critical.interrupted = true;
            critical.fringe.clear();
            shared.monitor.notify_all();
            return WorkLoad::Aborted;
        }

        // Nothing to do yet ? => Wait for someone to post jobs
        let node = match critical.fringe.pop() {
            Some(node) => node,
            None => {
                shared.monitor.wait(&mut critical);
                return WorkLoad::Starvation;
            }
        };
        // Nothing relevant ? => all the remaining nodes can be pruned
        if node.ub <= shared.solver.incumbent.value() {
            critical.fringe.clear();
            return WorkLoad::Starvation;
        }

        // Consume the current node and process it
        critical.ongoing += 1;
        critical.explored += 1;
        WorkLoad::WorkItem { node }
    }
}

impl<'a, P> Solver for BranchAndBound<'a, P>
where
    P: Problem + Sync,
    P::State: Send + Sync,
    P::Domain: Send + Sync,
{
    type Domain = P::Domain;
    type Value = P::Value;

    /// Applies the branch and bound algorithm proposed by Bergman et al. to
    /// solve the problem to optimality. To do so, it spawns `nb_threads` workers
    /// (long running threads); each of which will continually get a workload
    /// and process it until the problem is solved.
    fn maximize(&mut self) -> Result<Completion<P::Value>, Error> {
        let mut fringe = SimpleFringe::new(MaxUB);
        fringe.push(self.root_node());

        let critical = {
            let shared = Shared {
                solver: &*self,
                critical: Mutex::new(Critical {
                    fringe,
                    ongoing: 0,
                    explored: 0,
                    interrupted: false,
                    error: None,
                }),
                monitor: Condvar::new(),
            };

            std::thread::scope(|s| {
                for _ in 0..self.nb_threads.max(1) {
                    let shared = &shared;
                    s.spawn(move || {
                        loop {
                            match Self::get_workload(shared) {
                                WorkLoad::Complete => break,
                                WorkLoad::Aborted => break,
                                WorkLoad::Starvation => continue,
                                WorkLoad::WorkItem { node } => {
                                    let outcome = Self::process_one_node(shared, node);
                                    Self::notify_node_finished(shared, outcome);
                                }
                            }
                        }
                    });
                }
            });
            shared.critical.into_inner()
        };

        self.explored = critical.explored;
        if let Some(e) = critical.error {
            return Err(e);
        }
        let completion = Completion {
            is_exact: !critical.interrupted,
            best_value: self.incumbent.best_value(),
        };
        info!("explored {} subproblems, best value {:?}, exact: {}",
            self.explored, completion.best_value, completion.is_exact);
        Ok(completion)
    }

    /// Returns the best solution that has been identified for this problem.
    fn best_solution(&self) -> Option<Solution<P::Domain, P::Value>> {
        self.incumbent.solution()
    }
    /// Returns the value of the best solution that has been identified for
    /// this problem.
    fn best_value(&self) -> Option<P::Value> {
        self.incumbent.best_value()
    }
    /// Returns the value of the best lower bound that has been identified for
    /// this problem.
    fn best_lower_bound(&self) -> P::Value {
        self.incumbent.value()
    }
    /// Sets a primal (best known value and solution) of the problem.
    fn set_primal(&mut self, solution: Solution<P::Domain, P::Value>) {
        self.incumbent.offer(solution);
    }
    /// Returns the number of nodes that have been explored so far.
    fn explored(&self) -> usize {
        self.explored
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
