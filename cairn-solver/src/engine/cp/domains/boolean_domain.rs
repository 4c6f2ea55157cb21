use super::interval_domain::IntervalDomain;

/// A 0-1 domain.
///
/// It shares its representation with [`IntervalDomain`], but since every value is a bound it is
/// enumerated: removing any value is always exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BooleanDomain {
    values: IntervalDomain,
}

impl Default for BooleanDomain {
    fn default() -> Self {
        BooleanDomain {
            values: IntervalDomain::new(0, 1),
        }
    }
}

impl BooleanDomain {
    pub(crate) fn values(&self) -> &IntervalDomain {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut IntervalDomain {
        &mut self.values
    }
}
