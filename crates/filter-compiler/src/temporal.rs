//! Operand-order rules for temporal predicates.
//!
//! The rules are asymmetric: `Begins`, `Ends` and `During`
//! need the property first, their mirror images `BegunBy`, `EndedBy` and
//! `TContains` need the period first, and `TEquals` refuses periods.

use crate::error::CompileError;
use filter_syntax::ast::operator::TemporalOperator;

/// Temporal operand of a predicate, with bounds of any representation
/// (instants, or values already rendered for the attribute).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemporalOperand<T> {
    Instant(T),
    Period(T, T),
}

/// Comparison the property must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemporalMatch<T> {
    Equals(T),
    After(T),
    Before(T),
    Between(T, T),
}

/// Resolves `op` applied to a property and `operand`; `swapped` means the
/// literal was the first argument.
pub fn normalize<T>(
    op: TemporalOperator,
    operand: TemporalOperand<T>,
    swapped: bool,
) -> Result<TemporalMatch<T>, CompileError> {
    use TemporalMatch::*;
    use TemporalOperand::{Instant, Period as Span};

    let resolved = match (op, operand, swapped) {
        (TemporalOperator::After, Instant(t), false) => After(t),
        (TemporalOperator::After, Instant(t), true) => Before(t),
        (TemporalOperator::After, Span(_, end), false) => After(end),
        (TemporalOperator::After, Span(begin, _), true) => Before(begin),

        (TemporalOperator::Before, Instant(t), false) => Before(t),
        (TemporalOperator::Before, Instant(t), true) => After(t),
        (TemporalOperator::Before, Span(begin, _), false) => Before(begin),
        (TemporalOperator::Before, Span(_, end), true) => After(end),

        (TemporalOperator::Begins, Span(begin, _), false) => Equals(begin),
        (TemporalOperator::BegunBy, Span(begin, _), true) => Equals(begin),
        (TemporalOperator::Ends, Span(_, end), false) => Equals(end),
        (TemporalOperator::EndedBy, Span(_, end), true) => Equals(end),
        (TemporalOperator::During, Span(begin, end), false) => Between(begin, end),
        (TemporalOperator::TContains, Span(begin, end), true) => Between(begin, end),

        (
            TemporalOperator::Begins | TemporalOperator::Ends | TemporalOperator::During,
            Span(..),
            true,
        ) => {
            return Err(CompileError::illegal(format!(
                "{op} requires the property as the first operand and a period as the second"
            )));
        }
        (
            TemporalOperator::BegunBy | TemporalOperator::EndedBy | TemporalOperator::TContains,
            Span(..),
            false,
        ) => {
            return Err(CompileError::illegal(format!(
                "{op} requires a period as the first operand and the property as the second"
            )));
        }
        (
            TemporalOperator::Begins
            | TemporalOperator::BegunBy
            | TemporalOperator::Ends
            | TemporalOperator::EndedBy
            | TemporalOperator::During
            | TemporalOperator::TContains,
            Instant(_),
            _,
        ) => {
            return Err(CompileError::illegal(format!(
                "{op} requires a period operand"
            )));
        }

        (TemporalOperator::TEquals, Instant(t), _) => Equals(t),
        (TemporalOperator::TEquals, Span(..), _) => {
            return Err(CompileError::illegal(
                "TEquals requires an instant operand, not a period",
            ));
        }

        (
            TemporalOperator::AnyInteracts
            | TemporalOperator::Meets
            | TemporalOperator::MetBy
            | TemporalOperator::OverlappedBy
            | TemporalOperator::TOverlaps,
            _,
            _,
        ) => {
            return Err(CompileError::unsupported(format!(
                "temporal operator {op}"
            )));
        }
    };

    Ok(resolved)
}
