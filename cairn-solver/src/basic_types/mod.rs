mod constraint_operation_error;
mod propagation_status_cp;
mod random;
mod solution;
mod trail;

pub use constraint_operation_error::*;
pub use propagation_status_cp::*;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
pub use solution::Solution;
pub(crate) use trail::Trail;
