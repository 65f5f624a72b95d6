//! Deterministic, pure logic for the people model and arithmetic helpers.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod arith;
pub mod census;
pub mod name;
pub mod person;
