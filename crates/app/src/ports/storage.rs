//! Storage port — repository trait for employee persistence.

use std::future::Future;

use plantilla_domain::employee::{Employee, EmployeeChanges, NewEmployee};
use plantilla_domain::error::PlantillaError;
use plantilla_domain::id::EmployeeId;

/// Repository for persisting and querying [`Employee`]s.
///
/// Implementations own the records and hand out clones. Every method must be
/// atomic with respect to concurrent callers.
pub trait EmployeeRepository {
    /// Insert a new employee, assigning the next free id when none is given.
    ///
    /// Fails with [`PlantillaError::Conflict`] when the supplied id is taken.
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, PlantillaError>> + Send;

    /// Get an employee by its unique identifier.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, PlantillaError>> + Send;

    /// Get all employees in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, PlantillaError>> + Send;

    /// Replace the mutable fields of an existing employee.
    ///
    /// Returns `None` when no employee with `id` exists.
    fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> impl Future<Output = Result<Option<Employee>, PlantillaError>> + Send;

    /// Delete an employee, returning whether a record was removed.
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, PlantillaError>> + Send;
}
