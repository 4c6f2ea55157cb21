use super::Decision;

/// The decisions on the path from the root to the current search node.
///
/// The decision at position `i` was applied in world `i + 1`.
#[derive(Clone, Debug, Default)]
pub(crate) struct DecisionPath {
    decisions: Vec<Decision>,
}

impl DecisionPath {
    pub(crate) fn len(&self) -> usize {
        self.decisions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Appends the decision, linking it to the current last decision as its parent.
    pub(crate) fn push(&mut self, decision: Decision) -> Decision {
        let decision = Decision {
            parent: self.decisions.len().checked_sub(1),
            ..decision
        };
        self.decisions.push(decision);
        decision
    }

    pub(crate) fn pop(&mut self) -> Option<Decision> {
        self.decisions.pop()
    }

    pub(crate) fn last(&self) -> Option<&Decision> {
        self.decisions.last()
    }

    pub(crate) fn clear(&mut self) {
        self.decisions.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Decision> + '_ {
        self.decisions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;

    #[test]
    fn decisions_are_linked_to_their_parent() {
        let mut path = DecisionPath::default();

        let first = path.push(Decision::assign(DomainId::new(0), 1));
        let second = path.push(Decision::assign(DomainId::new(1), 1));

        assert_eq!(None, first.parent);
        assert_eq!(Some(0), second.parent);

        let _ = path.pop();
        let replaced = path.push(Decision::assign(DomainId::new(2), 1));
        assert_eq!(Some(0), replaced.parent);
        assert_eq!(2, path.len());
    }
}
