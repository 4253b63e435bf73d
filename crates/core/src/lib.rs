//! LabMan domain crate.
//!
//! Holds the domain vocabulary (statuses, output categories, typed JSON
//! payloads), calendar-month helpers and the reporting layer: the
//! [`statistics::StatisticsSource`] datastore abstraction plus the pure
//! aggregation functions built on top of it. This crate has no database
//! dependency; `labman-db` provides the SQLite-backed source.

pub mod error;
pub mod months;
pub mod payload;
pub mod statistics;
pub mod status;
pub mod types;
