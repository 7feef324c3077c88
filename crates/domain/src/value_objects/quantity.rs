//! Quantity value object for item stacks

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Number of copies in an item row. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Merge another stack into this one.
    pub fn stack(self, other: Quantity) -> Result<Self, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| DomainError::constraint("Item quantity overflow"))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_rejected() {
        assert!(Quantity::new(0).is_err());
    }

    #[test]
    fn test_stack_adds() {
        let merged = Quantity::new(3).unwrap().stack(Quantity::new(2).unwrap());
        assert_eq!(merged.unwrap().get(), 5);
    }

    #[test]
    fn test_stack_overflow() {
        let big = Quantity::new(u32::MAX).unwrap();
        assert!(matches!(
            big.stack(Quantity::ONE),
            Err(DomainError::Constraint(_))
        ));
    }
}
