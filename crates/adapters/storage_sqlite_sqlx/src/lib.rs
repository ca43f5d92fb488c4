//! # plantilla-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `plantilla-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `plantilla-app` (for port traits) and `plantilla-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod employee_repo;
mod error;
mod pool;

pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
