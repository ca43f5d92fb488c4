//! Typed identifier newtype backed by a positive integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for an [`Employee`](crate::employee::Employee).
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// First identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Largest identifier a client may choose (2^53 - 1).
    ///
    /// Keeps ids exact for JavaScript clients and leaves the stores room to
    /// keep assigning ids after the highest one a client picked.
    pub const MAX: Self = Self((1 << 53) - 1);

    /// Wrap a client-chosen value, rejecting anything outside `1..=MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when the value is out of range.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        let id = Self(value);
        id.validate()?;
        Ok(id)
    }

    /// Wrap a value used only to address an existing record.
    ///
    /// Store-assigned ids may sit above [`Self::MAX`], so only zero and
    /// negatives are rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `value <= 0`.
    pub fn lookup(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Wrap a value read back from a trusted source such as the database.
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// The identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Check that the identifier is one a client may choose.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when the value is not in `1..=MAX`.
    pub fn validate(self) -> Result<(), ValidationError> {
        if self.0 <= 0 || self.0 > Self::MAX.0 {
            return Err(ValidationError::InvalidId(self.0));
        }
        Ok(())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
