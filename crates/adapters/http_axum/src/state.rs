//! Shared application state for axum handlers.

use std::sync::Arc;

use plantilla_app::ports::EmployeeRepository;
use plantilla_app::services::employee_service::EmployeeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<ER> {
    /// Employee CRUD service.
    pub employee_service: Arc<EmployeeService<ER>>,
}

impl<ER> Clone for AppState<ER> {
    fn clone(&self) -> Self {
        Self {
            employee_service: Arc::clone(&self.employee_service),
        }
    }
}

impl<ER> AppState<ER>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(employee_service: EmployeeService<ER>) -> Self {
        Self {
            employee_service: Arc::new(employee_service),
        }
    }
}
