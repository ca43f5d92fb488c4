//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod employees;

use axum::Router;
use axum::routing::get;

use plantilla_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<ER>() -> Router<AppState<ER>>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/empleados",
            get(employees::list::<ER>).post(employees::create::<ER>),
        )
        .route(
            "/empleados/{id}",
            get(employees::get::<ER>)
                .put(employees::update::<ER>)
                .delete(employees::delete::<ER>),
        )
}
