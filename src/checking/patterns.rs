//! Pattern scanners that pick declarations and call sites out of the flat
//! text of a document. Nothing downstream looks at the text directly, so a
//! grammar-driven parser could replace these two functions without touching
//! the symbol table or the call checks.

use tracing::debug;

use crate::language::DECLARATIONS;

/// `define name`, `define name()` or `define name(parameter)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclMatch<'i> {
    pub name: &'i str,
    pub offset: usize,
    pub parameter: Option<&'i str>,
    /// Whether a parameter list was matched along with the name.
    pub parenthesized: bool,
}

/// An identifier followed by a parenthesized, possibly empty, argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMatch<'i> {
    pub name: &'i str,
    pub offset: usize,
    /// Everything between the parentheses, nested parentheses included.
    pub arguments: &'i str,
}

impl<'i> CallMatch<'i> {
    pub fn has_arguments(&self) -> bool {
        !self
            .arguments
            .trim()
            .is_empty()
    }

    /// Count the arguments separated by commas outside of any nested
    /// parentheses.
    pub fn argument_count(&self) -> usize {
        if !self.has_arguments() {
            return 0;
        }

        let mut depth = 0usize;
        let mut count = 1;
        for c in self
            .arguments
            .chars()
        {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => count += 1,
                _ => {}
            }
        }
        count
    }
}

pub fn find_declarations(text: &str) -> Vec<DeclMatch<'_>> {
    let re = crate::pattern!(&format!(
        r"\b(?:{})\s+([_a-zA-Z][_a-zA-Z0-9]*)(\s*\(\s*([_a-zA-Z][_a-zA-Z0-9]*)?\s*\))?",
        DECLARATIONS.join("|")
    ));

    let declarations: Vec<DeclMatch> = re
        .captures_iter(text)
        .filter_map(|cap| {
            let name = cap.get(1)?;
            Some(DeclMatch {
                name: name.as_str(),
                offset: name.start(),
                parameter: cap
                    .get(3)
                    .map(|m| m.as_str()),
                parenthesized: cap
                    .get(2)
                    .is_some(),
            })
        })
        .collect();

    debug!("Found {} declarations", declarations.len());
    declarations
}

pub fn find_call_sites(text: &str) -> Vec<CallMatch<'_>> {
    let re = crate::pattern!(r"\b([_a-zA-Z][_a-zA-Z0-9]*)\(");

    let calls: Vec<CallMatch> = re
        .captures_iter(text)
        .filter_map(|cap| {
            let name = cap.get(1)?;
            let whole = cap.get(0)?;
            let close = matching_parenthesis(text, whole.end())?;
            Some(CallMatch {
                name: name.as_str(),
                offset: name.start(),
                arguments: &text[whole.end()..close],
            })
        })
        .collect();

    debug!("Found {} call sites", calls.len());
    calls
}

/// Given the offset just past an opening parenthesis, find the offset of the
/// parenthesis that closes it.
fn matching_parenthesis(text: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in text[start..]
        .bytes()
        .enumerate()
    {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }
    None
}
