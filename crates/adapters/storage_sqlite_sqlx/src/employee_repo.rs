//! `SQLite` implementation of [`EmployeeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use plantilla_app::ports::EmployeeRepository;
use plantilla_domain::employee::{Employee, EmployeeChanges, NewEmployee};
use plantilla_domain::error::{ConflictError, PlantillaError};
use plantilla_domain::id::EmployeeId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Employee`].
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Employee {
            id: EmployeeId::from_raw(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
        }))
    }
}

// A NULL id lets AUTOINCREMENT pick the next value; position is computed in
// the same statement so ordering stays consistent under concurrent inserts.
const INSERT: &str = "INSERT INTO employees (id, position, first_name, last_name, email) \
     VALUES (?, (SELECT COALESCE(MAX(position), 0) + 1 FROM employees), ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, first_name, last_name, email FROM employees WHERE id = ?";
const SELECT_ALL: &str =
    "SELECT id, first_name, last_name, email FROM employees ORDER BY position, id";
const UPDATE: &str = "UPDATE employees SET first_name = ?, last_name = ?, email = ? WHERE id = ? \
     RETURNING id, first_name, last_name, email";
const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?";

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// `SQLite`-backed employee repository.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, PlantillaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let requested = employee.id;
            let result = sqlx::query(INSERT)
                .bind(requested.map(EmployeeId::as_i64))
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .execute(&pool)
                .await;

            match result {
                Ok(done) => {
                    let id = EmployeeId::from_raw(done.last_insert_rowid());
                    Ok(employee.into_employee(id))
                }
                Err(err) if is_unique_violation(&err) => Err(ConflictError {
                    entity: "Employee",
                    id: requested.map(|id| id.to_string()).unwrap_or_default(),
                }
                .into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, PlantillaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, PlantillaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> impl Future<Output = Result<Option<Employee>, PlantillaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&changes.first_name)
                .bind(&changes.last_name)
                .bind(&changes.email)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, PlantillaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let done = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(done.rows_affected() > 0)
        }
    }
}
