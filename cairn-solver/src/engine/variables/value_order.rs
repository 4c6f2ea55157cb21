use std::fmt::Display;

/// The order in which the values of a domain are enumerated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValueOrder {
    #[default]
    Ascending,
    Descending,
    /// The ascending sequence with its first `n mod size` values moved to the end.
    RotateLeft(usize),
}

impl Display for ValueOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueOrder::Ascending => write!(f, "ascending"),
            ValueOrder::Descending => write!(f, "descending"),
            ValueOrder::RotateLeft(n) => write!(f, "rotate-left({n})"),
        }
    }
}
