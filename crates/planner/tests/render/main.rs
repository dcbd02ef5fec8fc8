//! Rendering tests
//!
//! These tests verify that compiled query trees render into both the
//! document-search JSON DSL and parameterized SQL predicates.

mod json;
