//! Contains propagator implementations that are used in the solver.
//!
//! See the [`crate::engine::cp::propagation`] for info on propagators.

mod all_different;
pub(crate) mod arithmetic;
pub mod cumulative;

pub use all_different::AllDifferentPropagator;
pub use arithmetic::*;
pub use cumulative::CumulativeFiltering;
