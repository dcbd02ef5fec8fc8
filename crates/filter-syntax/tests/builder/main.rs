//! Filter builder tests
//!
//! These tests verify that filter trees assembled through the builder
//! helpers carry the expected kinds and operands.

mod filters;
