//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! JSON text columns are typed through `sqlx::types::Json` so callers work
//! with the `labman_core::payload` structures directly.

pub mod gantt;
pub mod milestone;
pub mod organization;
pub mod progress;
pub mod project;
pub mod project_organization;
pub mod task;
pub mod user;
