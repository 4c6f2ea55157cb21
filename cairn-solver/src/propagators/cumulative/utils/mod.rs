//! Contains the time-table structures and the filtering rules shared by the propagators of the
//! cumulative constraint.
mod resource_profile;
mod util;

pub(crate) use resource_profile::*;
pub(crate) use util::*;
