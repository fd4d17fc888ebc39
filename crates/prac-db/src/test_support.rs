//! Shared test utilities for prac-db unit tests.
