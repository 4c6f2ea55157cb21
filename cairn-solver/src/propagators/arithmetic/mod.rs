mod binary_not_equals;
mod linear_less_or_equal;

pub use binary_not_equals::BinaryNotEqualsPropagator;
pub use linear_less_or_equal::LinearLessOrEqualPropagator;
