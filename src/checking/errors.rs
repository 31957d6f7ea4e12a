use std::fmt;

/// Which pass raised a problem. Each category has its own limit on how many
/// problems get reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    /// Illegal characters and rejected declarations.
    Declarations,
    /// Everything found by looking at call sites.
    Calls,
}

/// A single problem found in a Karel document. The first field of every
/// variant is the byte offset the problem was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    IllegalCharacter(usize, char),
    AlreadyDefined(usize, String),
    ReservedWord(usize, String),
    UnexpectedParameter(usize, String),
    MissingParameter(usize, String),
    InstructionParameter(usize, String),
    TooManyParameters(usize, String),
    Undeclared(usize, String),
}

impl Problem {
    pub fn offset(&self) -> usize {
        match self {
            Problem::IllegalCharacter(offset, _) => *offset,
            Problem::AlreadyDefined(offset, _) => *offset,
            Problem::ReservedWord(offset, _) => *offset,
            Problem::UnexpectedParameter(offset, _) => *offset,
            Problem::MissingParameter(offset, _) => *offset,
            Problem::InstructionParameter(offset, _) => *offset,
            Problem::TooManyParameters(offset, _) => *offset,
            Problem::Undeclared(offset, _) => *offset,
        }
    }

    /// The name this problem is about, if it concerns one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Problem::IllegalCharacter(_, _) => None,
            Problem::AlreadyDefined(_, name)
            | Problem::ReservedWord(_, name)
            | Problem::UnexpectedParameter(_, name)
            | Problem::MissingParameter(_, name)
            | Problem::InstructionParameter(_, name)
            | Problem::TooManyParameters(_, name)
            | Problem::Undeclared(_, name) => Some(name),
        }
    }

    /// Illegal characters are reported as a point; everything else spans the
    /// offending name.
    pub fn width(&self) -> usize {
        match self.name() {
            Some(name) => name.len(),
            None => 0,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Problem::IllegalCharacter(_, _)
            | Problem::AlreadyDefined(_, _)
            | Problem::ReservedWord(_, _) => Category::Declarations,
            _ => Category::Calls,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Problem::IllegalCharacter(_, c) => format!("Illegal character '{}'", c),
            Problem::AlreadyDefined(_, name) => {
                format!("Procedure '{}' is already defined", name)
            }
            Problem::ReservedWord(_, name) => format!(
                "'{}' is a reserved word, cannot be used as a procedure name",
                name
            ),
            Problem::UnexpectedParameter(_, name) => {
                format!("Procedure '{}' does not expect parameters", name)
            }
            Problem::MissingParameter(_, name) => {
                format!("Procedure '{}' expects a parameter", name)
            }
            Problem::InstructionParameter(_, name) => format!(
                "'{}' is an instruction, instructions take no parameters",
                name
            ),
            Problem::TooManyParameters(_, name) => format!(
                "'{}' is given more than one parameter, procedures take at most one",
                name
            ),
            Problem::Undeclared(_, name) => format!("Procedure '{}' is not declared", name),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
