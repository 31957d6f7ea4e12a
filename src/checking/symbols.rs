//! Building the table of user-defined procedures

use tracing::debug;

use super::patterns::DeclMatch;
use super::Problem;
use crate::language::{is_reserved, Arity, Symbol, SymbolTable};

/// Turn the declarations found in a document into its symbol table, in
/// document order. A name already taken by an earlier declaration is
/// rejected, as are the names of instructions and keywords; rejected
/// declarations are reported but leave the table untouched.
pub fn build_symbol_table(declarations: &[DeclMatch<'_>]) -> (SymbolTable, Vec<Problem>) {
    let mut table = SymbolTable::new();
    let mut problems = Vec::new();

    for declaration in declarations {
        let name = declaration.name;

        if table.contains(name) {
            problems.push(Problem::AlreadyDefined(declaration.offset, name.to_string()));
            continue;
        }

        if is_reserved(name) {
            problems.push(Problem::ReservedWord(declaration.offset, name.to_string()));
            continue;
        }

        table.insert(Symbol {
            name: name.to_string(),
            arity: Arity::from_parameter(declaration.parameter),
            offset: declaration.offset,
        });
    }

    debug!(
        "Declared {} procedure{}, rejected {}",
        table.len(),
        if table.len() == 1 { "" } else { "s" },
        problems.len()
    );

    (table, problems)
}
