use std::fmt::Display;

use enumset::EnumSetType;

/// The kinds of changes a propagator can be notified of.
#[derive(Debug, EnumSetType, Hash)]
pub enum IntDomainEvent {
    /// The domain was reduced to a single value.
    Assign,
    /// The lower bound was raised.
    LowerBound,
    /// The upper bound was lowered.
    UpperBound,
    /// A value was removed. Removing a bound is reported as both a bound event and a removal.
    Removal,
}

impl Display for IntDomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntDomainEvent::Assign => write!(f, "[Event:Assign]"),
            IntDomainEvent::LowerBound => write!(f, "[Event:LB]"),
            IntDomainEvent::UpperBound => write!(f, "[Event:UB]"),
            IntDomainEvent::Removal => write!(f, "[Event:Remove]"),
        }
    }
}
