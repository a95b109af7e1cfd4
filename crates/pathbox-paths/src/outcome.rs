/// Result of a search run.
///
/// A missing path is a normal outcome, not a fault; user-visible
/// notification is the caller's business. A run cancelled through its
/// [`Context`](pathbox_core::Context) also reports `NoPathFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    PathFound,
    NoPathFound,
}

impl SearchOutcome {
    /// Whether the run discovered a path.
    #[inline]
    pub fn found(self) -> bool {
        matches!(self, Self::PathFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_matches_variant() {
        assert!(SearchOutcome::PathFound.found());
        assert!(!SearchOutcome::NoPathFound.found());
    }
}
