//! Employee service — use-cases for managing employees.

use plantilla_domain::employee::{Employee, EmployeeChanges, NewEmployee};
use plantilla_domain::error::{NotFoundError, PlantillaError};
use plantilla_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

const ENTITY: &str = "Employee";

/// Application service for employee CRUD operations.
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new employee after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlantillaError::Validation`] if a client-chosen id is out of
    /// range, [`PlantillaError::Conflict`] if the supplied id is taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, employee), fields(employee_id = ?employee.id))]
    pub async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, PlantillaError> {
        employee.validate()?;
        let created = self.repo.create(employee).await?;
        tracing::info!(id = %created.id, "employee created");
        Ok(created)
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlantillaError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, PlantillaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all employees in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>, PlantillaError> {
        self.repo.get_all().await
    }

    /// Replace the mutable fields of an existing employee.
    ///
    /// # Errors
    ///
    /// Returns [`PlantillaError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<Employee, PlantillaError> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete an employee by id. Deleting a missing id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), PlantillaError> {
        if !self.repo.delete(id).await? {
            tracing::debug!(%id, "delete requested for unknown employee");
        }
        Ok(())
    }
}

fn not_found(id: EmployeeId) -> PlantillaError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}
