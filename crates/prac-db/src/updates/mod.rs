//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. An update with no fields set
//! returns the current record unchanged.

pub mod log_entry;
pub mod site;
pub mod student;
