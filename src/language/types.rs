//! Types representing the procedures a Karel program declares

use std::collections::BTreeMap;

/// Procedures in Karel take either no parameter or exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    Unary,
}

impl Arity {
    pub fn from_parameter(parameter: Option<&str>) -> Arity {
        match parameter {
            Some(_) => Arity::Unary,
            None => Arity::Nullary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub arity: Arity,
    /// Byte offset of the name within the declaring document.
    pub offset: usize,
}

/// The user-defined procedures of a single document, keyed by name. At most
/// one Symbol per name; whoever was declared first keeps the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            symbols: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols
            .get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols
            .contains_key(name)
    }

    /// Add a symbol unless one of the same name is already present, in which
    /// case the existing entry is retained and false is returned.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.contains(&symbol.name) {
            return false;
        }
        self.symbols
            .insert(symbol.name.clone(), symbol);
        true
    }

    pub fn len(&self) -> usize {
        self.symbols
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols
            .is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols
            .keys()
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols
            .values()
    }
}
