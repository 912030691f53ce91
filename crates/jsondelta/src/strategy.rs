use std::str::FromStr;

use crate::error::DiffError;

/// Controls how much of the original document a patch is allowed to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStrategy {
    /// Transform `a` into a document structurally equal to `b`, emitting
    /// removals for collection elements missing from `b`.
    ExactMatch,
    /// Guarantee every element of `b` is present; extras in `a` survive and
    /// no removals are emitted at collection locations.
    EnsureExists,
    /// Reserved. Accepted, but produces no collection-level operations.
    EnsureAbsent,
}

impl PatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchStrategy::ExactMatch => "exact-match",
            PatchStrategy::EnsureExists => "ensure-exists",
            PatchStrategy::EnsureAbsent => "ensure-absent",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, DiffError> {
        match s {
            "exact-match" => Ok(PatchStrategy::ExactMatch),
            "ensure-exists" => Ok(PatchStrategy::EnsureExists),
            "ensure-absent" => Ok(PatchStrategy::EnsureAbsent),
            other => Err(DiffError::InvalidOperation(format!(
                "unknown patch strategy: {other}"
            ))),
        }
    }
}

impl FromStr for PatchStrategy {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatchStrategy::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        for strategy in [
            PatchStrategy::ExactMatch,
            PatchStrategy::EnsureExists,
            PatchStrategy::EnsureAbsent,
        ] {
            assert_eq!(PatchStrategy::parse_str(strategy.as_str()).unwrap(), strategy);
        }
    }

    #[test]
    fn parse_unknown_strategy() {
        let err = "merge".parse::<PatchStrategy>().unwrap_err();
        assert!(matches!(err, DiffError::InvalidOperation(_)));
    }
}
