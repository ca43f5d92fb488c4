//! Employee — the single resource managed by the server.

use serde::{Deserialize, Serialize};

use crate::error::PlantillaError;
use crate::id::EmployeeId;

/// A stored employee record.
///
/// The wire names (`nombre`, `apellido`) are part of the public API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Create a builder for constructing a [`NewEmployee`].
    #[must_use]
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    /// Replace every mutable field, keeping the identifier.
    #[must_use]
    pub fn apply(self, changes: EmployeeChanges) -> Self {
        Self {
            id: self.id,
            first_name: changes.first_name,
            last_name: changes.last_name,
            email: changes.email,
        }
    }
}

/// Input for creating an employee. The store assigns `id` when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewEmployee {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlantillaError::Validation`] when a supplied id is outside
    /// the range a client may choose.
    pub fn validate(&self) -> Result<(), PlantillaError> {
        if let Some(id) = self.id {
            id.validate()?;
        }
        Ok(())
    }

    /// Materialize the record under its final identifier.
    #[must_use]
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Replacement values for an update. The identifier never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Step-by-step builder for [`NewEmployee`] and [`EmployeeChanges`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    id: Option<EmployeeId>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

impl EmployeeBuilder {
    #[must_use]
    pub fn id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewEmployee`].
    ///
    /// # Errors
    ///
    /// Returns [`PlantillaError::Validation`] if the id is out of range.
    /// Unset fields default to empty strings.
    pub fn build(self) -> Result<NewEmployee, PlantillaError> {
        let employee = NewEmployee {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Consume the builder and return [`EmployeeChanges`], ignoring any id.
    #[must_use]
    pub fn build_changes(self) -> EmployeeChanges {
        EmployeeChanges {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}
