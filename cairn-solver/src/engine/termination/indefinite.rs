use super::ResourceLimitReached;
use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> Option<ResourceLimitReached> {
        None
    }
}
