mod int_domain_event;
mod watch_list_cp;

pub use int_domain_event::*;
pub(crate) use watch_list_cp::WatchListCP;
pub use watch_list_cp::Watchers;
