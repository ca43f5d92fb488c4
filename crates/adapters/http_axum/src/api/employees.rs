//! JSON REST handlers for employees.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use plantilla_app::ports::EmployeeRepository;
use plantilla_domain::employee::Employee;
use plantilla_domain::id::EmployeeId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing an employee.
///
/// `id` is optional on create and ignored on update; clients commonly send
/// `"id": null`.
#[derive(Deserialize)]
pub struct EmployeeRequest {
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Employee>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Employee>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => {
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")]).into_response()
            }
        }
    }
}

/// `GET /api/empleados`
pub async fn list<ER>(State(state): State<AppState<ER>>) -> Result<ListResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /api/empleados/:id`
pub async fn get<ER>(
    State(state): State<AppState<ER>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let id = EmployeeId::lookup(id)?;
    let employee = state.employee_service.get_employee(id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}

/// `POST /api/empleados`
pub async fn create<ER>(
    State(state): State<AppState<ER>>,
    Json(req): Json<EmployeeRequest>,
) -> Result<CreateResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let mut builder = Employee::builder()
        .first_name(req.first_name)
        .last_name(req.last_name)
        .email(req.email);
    if let Some(id) = req.id {
        builder = builder.id(EmployeeId::new(id)?);
    }

    let employee = builder.build()?;
    let created = state.employee_service.create_employee(employee).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/empleados/:id`
pub async fn update<ER>(
    State(state): State<AppState<ER>>,
    Path(id): Path<i64>,
    Json(req): Json<EmployeeRequest>,
) -> Result<GetResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let id = EmployeeId::lookup(id)?;
    let changes = Employee::builder()
        .first_name(req.first_name)
        .last_name(req.last_name)
        .email(req.email)
        .build_changes();

    let updated = state.employee_service.update_employee(id, changes).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/empleados/:id`
pub async fn delete<ER>(
    State(state): State<AppState<ER>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EmployeeRepository + Send + Sync + 'static,
{
    let id = EmployeeId::lookup(id)?;
    state.employee_service.delete_employee(id).await?;
    Ok(DeleteResponse::Ok)
}
