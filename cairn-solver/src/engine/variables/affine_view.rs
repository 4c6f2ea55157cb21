use std::cmp::Ordering;

use enumset::EnumSet;
use num::Integer;

use super::TransformableVariable;
use crate::cairn_assert_simple;
use crate::engine::cp::Cause;
use crate::engine::cp::EmptyDomain;
use crate::engine::cp::Environment;
use crate::engine::cp::IntDomainEvent;
use crate::engine::cp::Watchers;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;

/// Models the constraint `y = ax + b`, by expressing the domain of `y` as a transformation of the
/// domain of `x`.
///
/// The scale is never zero.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct AffineView<Inner> {
    pub(crate) inner: Inner,
    scale: i32,
    offset: i32,
}

impl<Inner> AffineView<Inner> {
    pub fn new(inner: Inner, scale: i32, offset: i32) -> Self {
        cairn_assert_simple!(scale != 0, "an affine view cannot have a scale of zero");
        AffineView {
            inner,
            scale,
            offset,
        }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Apply the inverse transformation of this view on a value, to go from the value in the domain
    /// of `self` to a value in the domain of `self.inner`.
    fn invert(&self, value: i32, rounding: Rounding) -> i32 {
        let inverted_translation = value - self.offset;

        match rounding {
            Rounding::Up => -Integer::div_floor(&-inverted_translation, &self.scale),
            Rounding::Down => Integer::div_floor(&inverted_translation, &self.scale),
        }
    }

    /// The value of `self.inner` which maps onto `value`, if there is one.
    fn preimage(&self, value: i32) -> Option<i32> {
        ((value - self.offset) % self.scale == 0).then(|| self.invert(value, Rounding::Up))
    }

    fn map(&self, value: i32) -> i32 {
        self.scale * value + self.offset
    }
}

impl<View> IntegerVariable for AffineView<View>
where
    View: IntegerVariable,
{
    type AffineView = Self;

    fn lower_bound(&self, environment: &Environment) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.upper_bound(environment))
        } else {
            self.map(self.inner.lower_bound(environment))
        }
    }

    fn upper_bound(&self, environment: &Environment) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.lower_bound(environment))
        } else {
            self.map(self.inner.upper_bound(environment))
        }
    }

    fn contains(&self, environment: &Environment, value: i32) -> bool {
        self.preimage(value)
            .is_some_and(|inverted| self.inner.contains(environment, inverted))
    }

    fn size(&self, environment: &Environment) -> u64 {
        self.inner.size(environment)
    }

    fn iterate_domain(&self, environment: &Environment) -> impl Iterator<Item = i32> {
        self.inner
            .iterate_domain(environment)
            .map(|value| self.map(value))
    }

    fn remove(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        match self.preimage(value) {
            Some(inverted) => self.inner.remove(environment, inverted, cause),
            None => Ok(false),
        }
    }

    fn set_lower_bound(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        if self.scale >= 0 {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(environment, inverted, cause)
        } else {
            let inverted = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(environment, inverted, cause)
        }
    }

    fn set_upper_bound(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        if self.scale >= 0 {
            let inverted = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(environment, inverted, cause)
        } else {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(environment, inverted, cause)
        }
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, mut events: EnumSet<IntDomainEvent>) {
        let bound = IntDomainEvent::LowerBound | IntDomainEvent::UpperBound;
        let intersection = events.intersection(bound);
        if intersection.len() == 1 && self.scale.is_negative() {
            events = events.symmetrical_difference(bound);
        }
        self.inner.watch_all(watchers, events);
    }

    fn unpack_event(&self, event: IntDomainEvent) -> IntDomainEvent {
        if self.scale.is_negative() {
            match self.inner.unpack_event(event) {
                IntDomainEvent::LowerBound => IntDomainEvent::UpperBound,
                IntDomainEvent::UpperBound => IntDomainEvent::LowerBound,
                event => event,
            }
        } else {
            self.inner.unpack_event(event)
        }
    }
}

impl<View> TransformableVariable<AffineView<View>> for AffineView<View>
where
    View: IntegerVariable,
{
    fn scaled(&self, scale: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.scale *= scale;
        result.offset *= scale;
        result
    }

    fn offset(&self, offset: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.offset += offset;
        result
    }
}

impl<Var: std::fmt::Debug> std::fmt::Debug for AffineView<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == -1 {
            write!(f, "-")?;
        } else if self.scale != 1 {
            write!(f, "{} * ", self.scale)?;
        }

        write!(f, "({:?})", self.inner)?;

        match self.offset.cmp(&0) {
            Ordering::Less => write!(f, " - {}", -self.offset)?,
            Ordering::Equal => {}
            Ordering::Greater => write!(f, " + {}", self.offset)?,
        }

        Ok(())
    }
}

impl From<DomainId> for AffineView<DomainId> {
    fn from(value: DomainId) -> Self {
        AffineView::new(value, 1, 0)
    }
}

enum Rounding {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::domains::Domain;

    #[test]
    fn scaling_an_affine_view() {
        let view = AffineView::new(DomainId::new(0), 3, 4);
        assert_eq!(3, view.scale);
        assert_eq!(4, view.offset);
        let scaled_view = view.scaled(6);
        assert_eq!(18, scaled_view.scale);
        assert_eq!(24, scaled_view.offset);
    }

    #[test]
    fn offsetting_an_affine_view() {
        let view = AffineView::new(DomainId::new(0), 3, 4);
        assert_eq!(3, view.scale);
        assert_eq!(4, view.offset);
        let scaled_view = view.offset(6);
        assert_eq!(3, scaled_view.scale);
        assert_eq!(10, scaled_view.offset);
    }

    #[test]
    fn affine_view_bounds_round_towards_the_inner_domain() {
        let mut environment = Environment::default();
        let domain = environment.grow(Domain::interval(-10, 10));
        let view = AffineView::new(domain, 2, 0);

        let _ = view
            .set_lower_bound(&mut environment, 1, Cause::Model)
            .expect("non-empty");
        assert_eq!(1, environment.lower_bound(domain));

        let _ = view
            .set_upper_bound(&mut environment, 5, Cause::Model)
            .expect("non-empty");
        assert_eq!(2, environment.upper_bound(domain));

        assert_eq!(2, view.lower_bound(&environment));
        assert_eq!(4, view.upper_bound(&environment));
        assert!(!view.contains(&environment, 3));
    }

    #[test]
    fn test_negated_variable_has_bounds_rounded_correctly() {
        let mut environment = Environment::default();
        let domain = environment.grow(Domain::interval(-10, 10));
        let view = AffineView::new(domain, -2, 0);

        let _ = view
            .set_upper_bound(&mut environment, -3, Cause::Model)
            .expect("non-empty");
        assert_eq!(2, environment.lower_bound(domain));

        let _ = view
            .set_lower_bound(&mut environment, -9, Cause::Model)
            .expect("non-empty");
        assert_eq!(4, environment.upper_bound(domain));
    }

    #[test]
    fn removing_a_value_outside_the_image_is_a_no_op() {
        let mut environment = Environment::default();
        let domain = environment.grow(Domain::interval(0, 3));
        let view = AffineView::new(domain, 3, 1);

        assert_eq!(Ok(false), view.remove(&mut environment, 2, Cause::Model));
        assert_eq!(Ok(true), view.remove(&mut environment, 1, Cause::Model));
        assert_eq!(1, environment.lower_bound(domain));
    }
}
