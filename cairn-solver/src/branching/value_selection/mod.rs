//! Provides the [`ValueSelector`] trait which is required
//! for value selectors to implement; the main method in this trait relies on
//! [`ValueSelector::select_value`] to turn a selected variable into a [`Decision`].
//!
//! Selectors which bind the variable (such as [`InDomainMin`]) produce an equality decision,
//! whose refutation removes the value again; [`InDomainSplit`] produces a bound decision.
#[cfg(doc)]
use crate::engine::search::Decision;

mod in_domain_max;
mod in_domain_min;
mod in_domain_order;
mod in_domain_random;
mod in_domain_random_bound;
mod in_domain_split;
mod value_selector;

pub use in_domain_max::*;
pub use in_domain_min::*;
pub use in_domain_order::*;
pub use in_domain_random::*;
pub use in_domain_random_bound::*;
pub use in_domain_split::*;
pub use value_selector::ValueSelector;
