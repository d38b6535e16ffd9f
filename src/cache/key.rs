//! Cache key derivation.

use std::fmt;

/// Parameter used for operations that take no argument.
pub const ALL_PARAM: &str = "all";

// == Operation ==
/// Cached storage operations. `search` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetAll,
    GetById,
    GetByCategory,
    GetByIndustry,
    GetPremium,
    GetByDifficulty,
    GetByLayout,
}

impl Operation {
    /// Operation names never contain `:`, which keeps keys unambiguous.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetAll => "getAll",
            Operation::GetById => "getById",
            Operation::GetByCategory => "getByCategory",
            Operation::GetByIndustry => "getByIndustry",
            Operation::GetPremium => "getPremium",
            Operation::GetByDifficulty => "getByDifficulty",
            Operation::GetByLayout => "getByLayout",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Cache Key ==
/// Opaque key identifying one `(operation, parameter)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(operation: Operation, param: impl fmt::Display) -> Self {
        Self(format!("{}:{}", operation, param))
    }

    /// Key for a parameterless operation.
    pub fn all(operation: Operation) -> Self {
        Self::new(operation, ALL_PARAM)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Layout};

    #[test]
    fn test_same_input_same_key() {
        assert_eq!(
            CacheKey::new(Operation::GetById, "ats-classic"),
            CacheKey::new(Operation::GetById, "ats-classic")
        );
    }

    #[test]
    fn test_parameterless_key() {
        assert_eq!(CacheKey::all(Operation::GetAll).as_str(), "getAll:all");
        assert_eq!(CacheKey::all(Operation::GetPremium).as_str(), "getPremium:all");
    }

    #[test]
    fn test_operations_do_not_collide() {
        // An id literally named "all" must not alias the getAll key
        assert_ne!(
            CacheKey::new(Operation::GetById, "all"),
            CacheKey::all(Operation::GetAll)
        );
        assert_ne!(
            CacheKey::new(Operation::GetByCategory, Category::Ats),
            CacheKey::new(Operation::GetByIndustry, "ats")
        );
    }

    #[test]
    fn test_params_with_separator_stay_distinct() {
        let a = CacheKey::new(Operation::GetById, "getAll:all");
        let b = CacheKey::all(Operation::GetAll);
        assert_ne!(a, b);
    }

    #[test]
    fn test_enum_params_use_wire_names() {
        assert_eq!(
            CacheKey::new(Operation::GetByLayout, Layout::TwoColumn).into_string(),
            "getByLayout:two-column"
        );
    }
}
