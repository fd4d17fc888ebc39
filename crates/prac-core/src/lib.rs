//! # prac-core
//!
//! Core types, key validation, and error types for PracTrack.
//!
//! This crate provides the foundational types shared across all PracTrack crates:
//! - Entity structs for students, sites, and hour-log entries
//! - Derived completion status and the math behind it
//! - Key validation and ID prefix constants
//! - Hours-from-times calculation for shift-style log entries
//! - Cross-cutting error types
//! - CLI response types

pub mod completion;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod hours;
pub mod ids;
pub mod responses;
