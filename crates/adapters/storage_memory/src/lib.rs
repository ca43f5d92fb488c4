//! # plantilla-adapter-storage-memory
//!
//! Volatile persistence adapter keeping every employee in process memory.
//!
//! ## Responsibilities
//! - Implement [`EmployeeRepository`] without any IO
//! - Preserve insertion order for listings
//! - Serialize concurrent mutations behind a single lock
//!
//! ## Dependency rule
//! Depends on `plantilla-app` (for port traits) and `plantilla-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use plantilla_app::ports::EmployeeRepository;
use plantilla_domain::employee::{Employee, EmployeeChanges, NewEmployee};
use plantilla_domain::error::{ConflictError, PlantillaError};
use plantilla_domain::id::EmployeeId;

#[derive(Debug)]
struct Inner {
    employees: Vec<Employee>,
    next_id: EmployeeId,
}

/// Mutex-guarded employee repository living in process memory.
///
/// Records are lost when the process exits.
#[derive(Debug)]
pub struct MemoryEmployeeRepository {
    inner: Mutex<Inner>,
}

impl Default for MemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                employees: Vec::new(),
                next_id: EmployeeId::FIRST,
            }),
        }
    }
}

impl MemoryEmployeeRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave `Inner` half-written, so the
    // poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }

    fn insert(&mut self, employee: NewEmployee) -> Result<Employee, PlantillaError> {
        let id = employee.id.unwrap_or(self.next_id);
        if self.position(id).is_some() {
            return Err(ConflictError {
                entity: "Employee",
                id: id.to_string(),
            }
            .into());
        }
        if id >= self.next_id {
            self.next_id = id.next();
        }
        let created = employee.into_employee(id);
        self.employees.push(created.clone());
        Ok(created)
    }
}

impl EmployeeRepository for MemoryEmployeeRepository {
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, PlantillaError>> + Send {
        let result = self.lock().insert(employee);
        async { result }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, PlantillaError>> + Send {
        let inner = self.lock();
        let result = inner.position(id).map(|idx| inner.employees[idx].clone());
        drop(inner);
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, PlantillaError>> + Send {
        let result = self.lock().employees.clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> impl Future<Output = Result<Option<Employee>, PlantillaError>> + Send {
        let mut inner = self.lock();
        let result = inner.position(id).map(|idx| {
            let slot = &mut inner.employees[idx];
            *slot = slot.clone().apply(changes);
            slot.clone()
        });
        drop(inner);
        async { Ok(result) }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, PlantillaError>> + Send {
        let mut inner = self.lock();
        let removed = inner
            .position(id)
            .map(|idx| inner.employees.remove(idx))
            .is_some();
        drop(inner);
        async move { Ok(removed) }
    }
}
