use itertools::Either;
use thiserror::Error;

use crate::basic_types::Trail;
use crate::cairn_assert_moderate;
use crate::cairn_assert_simple;
use crate::containers::KeyedVec;
use crate::engine::cp::delta::Delta;
use crate::engine::cp::delta::DeltaEvent;
use crate::engine::cp::delta::DeltaKind;
use crate::engine::cp::domains::Domain;
use crate::engine::cp::domains::DomainKind;
use crate::engine::cp::domains::DomainSnapshot;
use crate::engine::cp::Cause;
use crate::engine::cp::IntDomainEvent;
use crate::engine::cp::TrailedInteger;
use crate::engine::variables::DomainId;
use crate::engine::variables::ValueOrder;

/// Raised when a domain operation would remove every remaining value of a domain.
///
/// The domain is left untouched when this error is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the domain of {domain} would become empty (caused by {cause})")]
pub struct EmptyDomain {
    pub domain: DomainId,
    pub cause: Cause,
}

#[derive(Clone, Copy, Debug)]
enum TrailEntry {
    /// The bounds (and size) of a domain before it was tightened.
    Bounds {
        domain: DomainId,
        snapshot: DomainSnapshot,
        delta_len: usize,
    },
    /// A value which was removed from between the bounds of a domain.
    Hole {
        domain: DomainId,
        value: i32,
        delta_len: usize,
    },
    Integer {
        integer: TrailedInteger,
        old_value: i64,
    },
}

/// The backtrackable state of the solver: the variable domains, their deltas, and the trailed
/// integers, all undone through a single [`Trail`].
#[derive(Clone, Debug, Default)]
pub struct Environment {
    trail: Trail<TrailEntry>,
    domains: KeyedVec<DomainId, Domain>,
    deltas: KeyedVec<DomainId, Delta>,
    trailed_values: KeyedVec<TrailedInteger, i64>,
    /// The domain events which were not yet handed to the propagation engine.
    events: Vec<(IntDomainEvent, DomainId, Cause)>,
}

impl Environment {
    pub(crate) fn grow(&mut self, domain: Domain) -> DomainId {
        let _ = self.deltas.push(Delta::default());
        self.domains.push(domain)
    }

    pub(crate) fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub(crate) fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.domains.keys()
    }

    /// A copy of the current domains without any backtracking information.
    pub(crate) fn detached_copy(&self) -> Environment {
        let mut deltas = KeyedVec::default();
        for _ in self.domains.keys() {
            let _ = deltas.push(Delta::default());
        }

        Environment {
            domains: self.domains.clone(),
            deltas,
            ..Default::default()
        }
    }

    pub(crate) fn new_trailed_integer(&mut self, initial_value: i64) -> TrailedInteger {
        self.trailed_values.push(initial_value)
    }

    pub(crate) fn read_trailed_integer(&self, integer: TrailedInteger) -> i64 {
        self.trailed_values[integer]
    }

    pub(crate) fn assign_trailed_integer(&mut self, integer: TrailedInteger, value: i64) {
        let old_value = self.trailed_values[integer];
        if old_value == value {
            return;
        }

        self.trail.push(TrailEntry::Integer { integer, old_value });
        self.trailed_values[integer] = value;
    }
}

// Worlds
impl Environment {
    pub(crate) fn world_index(&self) -> usize {
        self.trail.world_index()
    }

    pub(crate) fn push_world(&mut self) {
        self.trail.push_world();
    }

    /// Restores the state to what it was when the current world was pushed.
    pub(crate) fn pop_world(&mut self) {
        let world = self.world_index();
        cairn_assert_simple!(world > 0, "cannot pop the root world");
        self.pop_to_world(world - 1);
    }

    /// Restores the state to what it was when world `world + 1` was pushed.
    pub(crate) fn pop_to_world(&mut self, world: usize) {
        if world >= self.world_index() {
            return;
        }

        for entry in self.trail.synchronise(world) {
            match entry {
                TrailEntry::Bounds {
                    domain,
                    snapshot,
                    delta_len,
                } => {
                    self.domains[domain].restore(snapshot);
                    self.deltas[domain].truncate(delta_len);
                }
                TrailEntry::Hole {
                    domain,
                    value,
                    delta_len,
                } => {
                    self.domains[domain].reinsert(value);
                    self.deltas[domain].truncate(delta_len);
                }
                TrailEntry::Integer { integer, old_value } => {
                    self.trailed_values[integer] = old_value;
                }
            }
        }

        self.events.clear();
    }
}

// Queries
impl Environment {
    pub(crate) fn domain_kind(&self, domain: DomainId) -> DomainKind {
        self.domains[domain].kind()
    }

    pub(crate) fn is_enumerated(&self, domain: DomainId) -> bool {
        self.domains[domain].is_enumerated()
    }

    pub(crate) fn lower_bound(&self, domain: DomainId) -> i32 {
        self.domains[domain].lower_bound()
    }

    pub(crate) fn upper_bound(&self, domain: DomainId) -> i32 {
        self.domains[domain].upper_bound()
    }

    pub(crate) fn size(&self, domain: DomainId) -> u64 {
        self.domains[domain].size()
    }

    pub(crate) fn contains(&self, domain: DomainId, value: i32) -> bool {
        self.domains[domain].contains(value)
    }

    pub(crate) fn is_fixed(&self, domain: DomainId) -> bool {
        self.domains[domain].is_fixed()
    }

    pub(crate) fn assigned_value(&self, domain: DomainId) -> Option<i32> {
        let domain = &self.domains[domain];
        domain.is_fixed().then(|| domain.lower_bound())
    }

    pub(crate) fn next_value(&self, domain: DomainId, value: i32) -> Option<i32> {
        self.domains[domain].next_value(value)
    }

    pub(crate) fn previous_value(&self, domain: DomainId, value: i32) -> Option<i32> {
        self.domains[domain].previous_value(value)
    }

    pub(crate) fn iter_domain(&self, domain: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains[domain].iter()
    }

    /// Iterates the values of `domain` in the given order.
    pub(crate) fn values_in_order(
        &self,
        domain: DomainId,
        order: ValueOrder,
    ) -> impl Iterator<Item = i32> + '_ {
        let values = &self.domains[domain];
        match order {
            ValueOrder::Ascending => Either::Left(values.iter()),
            ValueOrder::Descending => Either::Right(Either::Left(std::iter::successors(
                Some(values.upper_bound()),
                move |&value| values.previous_value(value),
            ))),
            ValueOrder::RotateLeft(n) => {
                let shift = (n as u64 % values.size()) as usize;
                Either::Right(Either::Right(
                    values.iter().skip(shift).chain(values.iter().take(shift)),
                ))
            }
        }
    }

    pub(crate) fn delta(&self, domain: DomainId) -> &[DeltaEvent] {
        self.deltas[domain].since(0)
    }

    pub(crate) fn delta_since(&self, domain: DomainId, cursor: usize) -> &[DeltaEvent] {
        self.deltas[domain].since(cursor)
    }

    pub(crate) fn delta_len(&self, domain: DomainId) -> usize {
        self.deltas[domain].len()
    }

    pub(crate) fn take_domain_events(&mut self) -> Vec<(IntDomainEvent, DomainId, Cause)> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub(crate) fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}

// Operations
impl Environment {
    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain: DomainId,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        let current = &self.domains[domain];
        if value <= current.lower_bound() {
            return Ok(false);
        }

        let Some(new_lower_bound) = current.first_value_at_least(value) else {
            return Err(EmptyDomain { domain, cause });
        };

        let snapshot = current.snapshot();
        self.record_bounds(domain, snapshot);
        self.domains[domain].set_bounds(new_lower_bound, snapshot.upper_bound);

        self.deltas[domain].push(DeltaEvent {
            kind: DeltaKind::LowerBound,
            lower: snapshot.lower_bound,
            upper: new_lower_bound - 1,
            cause,
        });
        self.events.push((IntDomainEvent::LowerBound, domain, cause));
        self.notify_if_assigned(domain, cause);

        Ok(true)
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain: DomainId,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        let current = &self.domains[domain];
        if value >= current.upper_bound() {
            return Ok(false);
        }

        let Some(new_upper_bound) = current.last_value_at_most(value) else {
            return Err(EmptyDomain { domain, cause });
        };

        let snapshot = current.snapshot();
        self.record_bounds(domain, snapshot);
        self.domains[domain].set_bounds(snapshot.lower_bound, new_upper_bound);

        self.deltas[domain].push(DeltaEvent {
            kind: DeltaKind::UpperBound,
            lower: new_upper_bound + 1,
            upper: snapshot.upper_bound,
            cause,
        });
        self.events.push((IntDomainEvent::UpperBound, domain, cause));
        self.notify_if_assigned(domain, cause);

        Ok(true)
    }

    /// Reduces the domain to the single value `value`.
    pub(crate) fn instantiate(
        &mut self,
        domain: DomainId,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        let current = &self.domains[domain];
        if !current.contains(value) {
            return Err(EmptyDomain { domain, cause });
        }
        if current.is_fixed() {
            return Ok(false);
        }

        let snapshot = current.snapshot();
        self.record_bounds(domain, snapshot);
        self.domains[domain].set_bounds(value, value);

        if value > snapshot.lower_bound {
            self.deltas[domain].push(DeltaEvent {
                kind: DeltaKind::LowerBound,
                lower: snapshot.lower_bound,
                upper: value - 1,
                cause,
            });
            self.events.push((IntDomainEvent::LowerBound, domain, cause));
        }
        if value < snapshot.upper_bound {
            self.deltas[domain].push(DeltaEvent {
                kind: DeltaKind::UpperBound,
                lower: value + 1,
                upper: snapshot.upper_bound,
                cause,
            });
            self.events.push((IntDomainEvent::UpperBound, domain, cause));
        }
        self.events.push((IntDomainEvent::Assign, domain, cause));

        Ok(true)
    }

    /// Removes `value` from the domain.
    ///
    /// Removing a bound tightens that bound. Removing a value strictly inside the bounds of an
    /// interval domain does nothing and reports no change.
    pub(crate) fn remove_value(
        &mut self,
        domain: DomainId,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        let current = &self.domains[domain];
        if !current.contains(value) {
            return Ok(false);
        }
        if current.is_fixed() {
            return Err(EmptyDomain { domain, cause });
        }

        if value == current.lower_bound() {
            let changed = self.tighten_lower_bound(domain, value + 1, cause)?;
            self.events.push((IntDomainEvent::Removal, domain, cause));
            return Ok(changed);
        }
        if value == current.upper_bound() {
            let changed = self.tighten_upper_bound(domain, value - 1, cause)?;
            self.events.push((IntDomainEvent::Removal, domain, cause));
            return Ok(changed);
        }

        Ok(self.remove_interior(domain, value, cause))
    }

    /// Removes every value in `[lower, upper]` from the domain.
    pub(crate) fn remove_interval(
        &mut self,
        domain: DomainId,
        lower: i32,
        upper: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        if lower > upper {
            return Ok(false);
        }

        let current = &self.domains[domain];
        let lower_bound = current.lower_bound();
        let upper_bound = current.upper_bound();

        if lower <= lower_bound && upper >= upper_bound {
            return Err(EmptyDomain { domain, cause });
        }
        if lower <= lower_bound {
            return self.tighten_lower_bound(domain, upper + 1, cause);
        }
        if upper >= upper_bound {
            return self.tighten_upper_bound(domain, lower - 1, cause);
        }
        if !current.is_enumerated() {
            return Ok(false);
        }

        let mut changed = false;
        let mut next = current.first_value_at_least(lower);
        while let Some(value) = next.filter(|&value| value <= upper) {
            changed |= self.remove_interior(domain, value, cause);
            next = self.domains[domain].next_value(value);
        }

        Ok(changed)
    }

    fn remove_interior(&mut self, domain: DomainId, value: i32, cause: Cause) -> bool {
        cairn_assert_moderate!(
            self.domains[domain].lower_bound() < value
                && value < self.domains[domain].upper_bound()
        );

        if !self.domains[domain].is_enumerated() {
            return false;
        }

        let delta_len = self.deltas[domain].len();
        self.trail.push(TrailEntry::Hole {
            domain,
            value,
            delta_len,
        });
        let _ = self.domains[domain].remove_interior(value);

        self.deltas[domain].push(DeltaEvent {
            kind: DeltaKind::Removal,
            lower: value,
            upper: value,
            cause,
        });
        self.events.push((IntDomainEvent::Removal, domain, cause));

        true
    }

    fn record_bounds(&mut self, domain: DomainId, snapshot: DomainSnapshot) {
        let delta_len = self.deltas[domain].len();
        self.trail.push(TrailEntry::Bounds {
            domain,
            snapshot,
            delta_len,
        });
    }

    fn notify_if_assigned(&mut self, domain: DomainId, cause: Cause) {
        if self.domains[domain].is_fixed() {
            self.events.push((IntDomainEvent::Assign, domain, cause));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;

    fn values(environment: &Environment, domain: DomainId) -> Vec<i32> {
        environment.iter_domain(domain).collect()
    }

    #[test]
    fn no_change_is_reported_when_bound_is_not_tighter() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::interval(5, 10));

        assert_eq!(environment.tighten_lower_bound(x, 2, Cause::Model), Ok(false));
        assert_eq!(environment.tighten_upper_bound(x, 15, Cause::Model), Ok(false));
        assert_eq!(environment.remove_value(x, 15, Cause::Model), Ok(false));
        assert!(environment.delta(x).is_empty());
        assert!(!environment.has_pending_events());
    }

    #[test]
    fn removing_inside_an_interval_is_a_no_op() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::interval(0, 9));

        assert_eq!(environment.remove_value(x, 4, Cause::Model), Ok(false));
        assert_eq!(environment.size(x), 10);
    }

    #[test]
    fn removing_a_bound_of_an_interval_tightens_it() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::interval(0, 9));

        assert_eq!(environment.remove_value(x, 0, Cause::Model), Ok(true));
        assert_eq!(environment.lower_bound(x), 1);
        assert_eq!(environment.remove_value(x, 9, Cause::Model), Ok(true));
        assert_eq!(environment.upper_bound(x), 8);
    }

    #[test]
    fn empty_domain_leaves_the_domain_untouched() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::bitset(&[1, 3, 5]));

        let result = environment.tighten_lower_bound(x, 6, Cause::Decision);

        assert_eq!(
            result,
            Err(EmptyDomain {
                domain: x,
                cause: Cause::Decision
            })
        );
        assert_eq!(values(&environment, x), vec![1, 3, 5]);
        assert!(environment.delta(x).is_empty());
        assert!(environment.instantiate(x, 2, Cause::Model).is_err());
        assert!(environment.remove_interval(x, 0, 9, Cause::Model).is_err());
    }

    #[test]
    fn bound_moves_skip_holes() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::bitset(&[0, 3, 18]));

        assert_eq!(environment.tighten_lower_bound(x, 1, Cause::Model), Ok(true));
        assert_eq!(environment.lower_bound(x), 3);
        assert_eq!(environment.tighten_upper_bound(x, 17, Cause::Model), Ok(true));
        assert_eq!(environment.assigned_value(x), Some(3));

        let events = environment.take_domain_events();
        assert!(events.contains(&(IntDomainEvent::Assign, x, Cause::Model)));
    }

    #[test]
    fn removing_an_interval_from_a_bitset_creates_holes() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::bitset(&[0, 1, 2, 3, 4, 5]));

        assert_eq!(environment.remove_interval(x, 2, 3, Cause::Model), Ok(true));

        assert_eq!(values(&environment, x), vec![0, 1, 4, 5]);
        assert_eq!(environment.delta(x).len(), 2);
        assert!(environment
            .delta(x)
            .iter()
            .all(|event| event.kind == DeltaKind::Removal));
    }

    #[test]
    fn values_can_be_visited_in_every_order() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::bitset(&[1, 2, 4, 8]));

        let collect =
            |order| -> Vec<i32> { environment.values_in_order(x, order).collect::<Vec<_>>() };

        assert_eq!(collect(ValueOrder::Ascending), vec![1, 2, 4, 8]);
        assert_eq!(collect(ValueOrder::Descending), vec![8, 4, 2, 1]);
        assert_eq!(collect(ValueOrder::RotateLeft(1)), vec![2, 4, 8, 1]);
        assert_eq!(collect(ValueOrder::RotateLeft(6)), vec![4, 8, 1, 2]);
    }

    #[test]
    fn popping_a_world_restores_domains_deltas_and_integers() {
        let mut environment = Environment::default();
        let x = environment.grow(Domain::bitset(&[0, 1, 2, 3, 4, 5, 6]));
        let y = environment.grow(Domain::interval(-3, 3));
        let flag = environment.new_trailed_integer(0);

        let _ = environment.remove_value(x, 6, Cause::Model);
        let size_before = environment.size(x);
        let delta_before = environment.delta_len(x);

        environment.push_world();
        let _ = environment.remove_value(x, 3, Cause::Decision);
        let _ = environment.tighten_lower_bound(x, 1, Cause::Decision);
        let _ = environment.instantiate(y, 0, Cause::Decision);
        environment.assign_trailed_integer(flag, 1);

        environment.push_world();
        let _ = environment.remove_interval(x, 2, 4, Cause::Decision);
        assert_eq!(values(&environment, x), vec![1, 5]);

        environment.pop_to_world(0);

        assert_eq!(values(&environment, x), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(environment.size(x), size_before);
        assert_eq!(environment.delta_len(x), delta_before);
        assert_eq!(environment.lower_bound(y), -3);
        assert_eq!(environment.upper_bound(y), 3);
        assert_eq!(environment.read_trailed_integer(flag), 0);
        assert_eq!(environment.world_index(), 0);
        assert!(!environment.has_pending_events());
    }

    #[test]
    fn random_operations_keep_domains_consistent() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let mut environment = Environment::default();
            let values_in_domain = (0..20)
                .filter(|_| rng.gen_bool(0.6))
                .chain([0, 19])
                .collect::<Vec<_>>();
            let x = environment.grow(Domain::bitset(&values_in_domain));
            let initial = values(&environment, x);

            for _ in 0..30 {
                if rng.gen_bool(0.3) {
                    environment.push_world();
                }

                let value = rng.gen_range(-2..22);
                let result = match rng.gen_range(0..4) {
                    0 => environment.remove_value(x, value, Cause::Decision),
                    1 => environment.tighten_lower_bound(x, value, Cause::Decision),
                    2 => environment.tighten_upper_bound(x, value, Cause::Decision),
                    _ => environment.remove_interval(x, value, value + 2, Cause::Decision),
                };

                if result.is_err() && environment.world_index() > 0 {
                    environment.pop_world();
                }

                let current = values(&environment, x);
                assert!(!current.is_empty());
                assert_eq!(current.len() as u64, environment.size(x));
                assert_eq!(current[0], environment.lower_bound(x));
                assert_eq!(current[current.len() - 1], environment.upper_bound(x));
            }

            environment.pop_to_world(0);
            assert_eq!(values(&environment, x), initial);
        }
    }
}
