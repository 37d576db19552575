//! Member Search Library
//!
//! Dynamic, optional-field search over members left-joined with their
//! team, with PostgreSQL and in-memory query sessions.

pub mod domain;
pub mod infrastructure;
