//! # plantilla-domain
//!
//! Pure domain model for the plantilla employee directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Employees** (the single resource exposed by the server)
//! - Contain all invariant enforcement (positive ids, required fields)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod employee;
