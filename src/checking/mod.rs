//! Validation of Karel source documents

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Settings, SymbolTable};

mod calls;
mod characters;
mod errors;
pub mod patterns;
mod symbols;

pub use calls::check_call_sites;
pub use characters::{illegal_characters, is_legal};
pub use errors::{Category, Problem};
pub use symbols::build_symbol_table;

/// Read a file and return an owned String for the validation passes to
/// borrow from.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// The outcome of one validation pass over a document: the procedures it
/// declares and every problem worth reporting, in the order they should be
/// published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub table: SymbolTable,
    pub problems: Vec<Problem>,
}

/// A single revalidation of one document. Built fresh for every change and
/// discarded once its Report has been handed over.
pub struct Session<'i> {
    text: &'i str,
    settings: Settings,
}

impl<'i> Session<'i> {
    pub fn new(text: &'i str, settings: Settings) -> Session<'i> {
        Session { text, settings }
    }

    /// Run the passes in turn. Illegal characters and rejected declarations
    /// share one limit; call site problems get a limit of their own.
    pub fn run(self) -> Report {
        let limit = self
            .settings
            .max_diagnostics;

        let mut problems: Vec<Problem> = illegal_characters(self.text)
            .take(limit)
            .collect();

        let declarations = patterns::find_declarations(self.text);
        let (table, rejected) = build_symbol_table(&declarations);

        let remaining = limit.saturating_sub(problems.len());
        problems.extend(
            rejected
                .into_iter()
                .take(remaining),
        );

        let calls = patterns::find_call_sites(self.text);
        problems.extend(
            check_call_sites(&calls, &declarations, &table)
                .into_iter()
                .take(limit),
        );

        debug!(
            "Validation found {} problem{}",
            problems.len(),
            if problems.len() == 1 { "" } else { "s" }
        );

        Report { table, problems }
    }
}

/// Validate a document's text in one go.
pub fn validate(text: &str, settings: Settings) -> Report {
    Session::new(text, settings).run()
}
