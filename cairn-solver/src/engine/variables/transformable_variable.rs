/// Variables from which affine views can be derived.
///
/// A view shares the domain of the variable it is derived from; no constraint is posted and no
/// variable is created.
pub trait TransformableVariable<View> {
    /// The view `scale * self`.
    ///
    /// Scaling keeps the number of values, so `{1, 2}` scaled by 2 is `{2, 4}`.
    fn scaled(&self, scale: i32) -> View;

    /// The view `self + offset`.
    fn offset(&self, offset: i32) -> View;
}
