mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! We differentiate between 3 different types of results:
    //! - For a **satisfaction** problem ([`SatisfactionResult`])
    //! - For enumerating **all solutions** ([`solution_iterator::IteratedSolution`])
    //! - For an **optimisation** problem ([`OptimisationResult`])
    pub use crate::api::outputs::solution_iterator;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::api::outputs::UnknownCause;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the variables which are used by the [`Solver`].
    //!
    //! A variable, in the context of the solver, is a view onto a domain. It may forward domain
    //! information unaltered, or apply transformations which can be performed without the need of
    //! constraints.
    //!
    //! Integer variables ([`IntegerVariable`]) are represented by [`DomainId`]s when interacting
    //! with the [`Solver`]. These variables can be created using [`Solver::new_bounded_integer`]
    //! when creating a variable with the domain between a lower-bound and an upper-bound or using
    //! [`Solver::new_sparse_integer`] when creating a variable with holes in the domain. These
    //! variables can be transformed (according to the trait [`TransformableVariable`]) to create
    //! an [`AffineView`].
    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::TransformableVariable;
    pub use crate::engine::variables::ValueOrder;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The random generator used by the branchers
    //! - The order in which the propagation engine schedules propagators
    pub use crate::engine::cp::GroupPolicy;
    pub use crate::engine::cp::PropagatorOrdering;
    pub use crate::engine::SatisfactionSolverOptions as SolverOptions;
    pub use crate::propagators::CumulativeFiltering;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when the state of the satisfaction/optimization problem is unknown.
    //!
    //! The main [`TerminationCondition`] is a condition which is polled by the [`Solver`] during
    //! the search process. It indicates when the [`Solver`] should stop, even if no definitive
    //! conclusions have been made.
    //!
    //! The most common example would be [`TimeBudget`], which terminates the [`Solver`] whenever
    //! the time budget is exceeded.
    pub use crate::engine::termination::Combinator;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::NodeBudget;
    pub use crate::engine::termination::ResourceLimitReached;
    pub use crate::engine::termination::SolutionBudget;
    pub use crate::engine::termination::TerminationCondition;
    pub use crate::engine::termination::TimeBudget;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod search {
    //! Contains the decisions taken by a [`Brancher`] and the hooks through which the search can
    //! be observed.
    pub use crate::engine::search::Branch;
    pub use crate::engine::search::Decision;
    pub use crate::engine::search::DecisionOperator;
    pub use crate::engine::search::SearchMonitor;
    pub use crate::engine::search::TraceMonitor;
    #[cfg(doc)]
    use crate::branching::Brancher;
}

pub mod propagation {
    //! Contains the interface through which propagators are implemented; see [`Propagator`].
    pub use crate::basic_types::Inconsistency;
    pub use crate::basic_types::PropagationStatus;
    pub use crate::engine::cp::propagation::EnqueueDecision;
    pub use crate::engine::cp::propagation::Entailment;
    pub use crate::engine::cp::propagation::LocalId;
    pub use crate::engine::cp::propagation::Priority;
    pub use crate::engine::cp::propagation::PropagationContext;
    pub use crate::engine::cp::propagation::PropagationContextMut;
    pub use crate::engine::cp::propagation::Propagator;
    pub use crate::engine::cp::propagation::PropagatorHandle;
    pub use crate::engine::cp::propagation::PropagatorId;
    pub use crate::engine::cp::propagation::PropagatorInitialisationContext;
    pub use crate::engine::cp::propagation::ReadDomains;
    pub use crate::engine::cp::DeltaEvent;
    pub use crate::engine::cp::DeltaKind;
    pub use crate::engine::cp::DomainEvents;
    pub use crate::engine::cp::EmptyDomain;
}
