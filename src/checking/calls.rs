//! Checking every call site against the symbol table and the built-in
//! vocabulary

use std::collections::HashSet;

use tracing::debug;

use super::patterns::{CallMatch, DeclMatch};
use super::Problem;
use crate::language::{is_instruction, is_keyword, Arity, SymbolTable};

/// Check each call site in document order. Call sites that are really the
/// name and parameter list of a declaration are skipped.
pub fn check_call_sites(
    calls: &[CallMatch<'_>],
    declarations: &[DeclMatch<'_>],
    table: &SymbolTable,
) -> Vec<Problem> {
    let declared: HashSet<usize> = declarations
        .iter()
        .filter(|declaration| declaration.parenthesized)
        .map(|declaration| declaration.offset)
        .collect();

    let problems: Vec<Problem> = calls
        .iter()
        .filter(|call| !declared.contains(&call.offset))
        .filter_map(|call| check_call(call, table))
        .collect();

    debug!(
        "Checked {} call sites, {} problems",
        calls.len(),
        problems.len()
    );

    problems
}

fn check_call(call: &CallMatch<'_>, table: &SymbolTable) -> Option<Problem> {
    let name = call.name;

    if let Some(symbol) = table.get(name) {
        return match (symbol.arity, call.argument_count()) {
            (Arity::Nullary, 0) => None,
            (Arity::Nullary, _) => Some(Problem::UnexpectedParameter(call.offset, name.to_string())),
            (Arity::Unary, 0) => Some(Problem::MissingParameter(call.offset, name.to_string())),
            (Arity::Unary, 1) => None,
            (Arity::Unary, _) => Some(Problem::TooManyParameters(call.offset, name.to_string())),
        };
    }

    if is_instruction(name) {
        if call.has_arguments() {
            return Some(Problem::InstructionParameter(
                call.offset,
                name.to_string(),
            ));
        }
        return None;
    }

    if is_keyword(name) {
        return None;
    }

    Some(Problem::Undeclared(call.offset, name.to_string()))
}
