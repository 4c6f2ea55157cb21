//! Contains the main building blocks for propagators.
//!
//! # Theoretical
//!
//! A propagator takes as input a set of variables (`x_i ∈ X`) and for each variable a corresponding
//! domain (`D_i ∈ D`); it can then be seen as a function which maps `D ↦ D'` such that `D'_i ⊆ D_i`
//! for all variables (i.e. the domain of a variable either remains the same after applying the
//! propagator or it becomes a subset of the domain before applying the propagator).
//!
//! An example of a propagator can be the simple not equal (`!=`) propagator, suppose that
//! we have two variables `x ∈ {0}` and `y ∈ {0, 1}` and the constraint `x != y`. The not equal
//! propagator will then take as input the variables `x` and `y` and their respective domains
//! `D = {D_x = {0}, D_y = {0, 1}` and produce a new domain `D' = {D'_x = {0}, D'_y = {1}}` for
//! which we can see that `D_x = D'_x` and `D'_y ⊆ D_y`.
//!
//! A propagator is said to be at fix-point if `D_x = D'_x` meaning that no further propagations
//! can take place when applying the propagator. A propagator is said to be "idempotent" if a single
//! call to it will result in it being at fix-point.
//!
//! # Practical
//!
//! A propagator implements the [`Propagator`] trait. During
//! [`Propagator::initialise_at_root`] it registers its variables with the
//! [`PropagatorInitialisationContext`], giving each of them a unique [`LocalId`]. When the domain
//! of a registered variable changes because of a decision or another propagator, the propagator
//! is notified through [`Propagator::notify`] and, unless it declines, scheduled. Once it runs,
//! [`PropagationContextMut::delta`] tells it how the domains of its variables changed since its
//! previous invocation.
//!
//! We do not require *any* propagator to be idempotent; a propagator which is not at fix-point
//! after propagating should keep iterating itself, since it is not notified of its own changes.
//!
//! See the [`crate::propagators`] module for concrete propagator implementations.
mod contexts;
mod local_id;
mod propagator;
mod propagator_id;
pub(crate) mod store;

pub use contexts::*;
pub use local_id::LocalId;
pub use propagator::*;
pub use propagator_id::PropagatorId;
pub(crate) use propagator_id::PropagatorVarId;
pub use store::PropagatorHandle;
pub(crate) use store::PropagatorStore;
