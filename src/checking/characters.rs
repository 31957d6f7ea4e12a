//! Character legality scanning

use super::Problem;

/// Punctuation that may appear in a Karel program.
const SYMBOLS: &str = ";()_/*&!|{}";

/// Byte order mark, which editors may leave at the start of a file.
const BOM: char = '\u{feff}';

pub fn is_legal(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == BOM || SYMBOLS.contains(c)
}

/// Lazily report every illegal character in the text, left to right. Callers
/// cap the output with `take()`; nothing past the cap is ever examined.
pub fn illegal_characters(text: &str) -> impl Iterator<Item = Problem> + '_ {
    text.char_indices()
        .filter(|(_, c)| !is_legal(*c))
        .map(|(offset, c)| Problem::IllegalCharacter(offset, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_characters() {
        for c in "abcXYZ019;()_/*&!|{} \t\r\n".chars() {
            assert!(is_legal(c), "{:?} should be legal", c);
        }
        for c in "#$%^-+=[]<>?,.:'\"`~@é\u{0007}".chars() {
            assert!(!is_legal(c), "{:?} should be illegal", c);
        }
    }

    #[test]
    fn offsets_are_in_bytes() {
        let problems: Vec<Problem> = illegal_characters("añb#").collect();
        assert_eq!(
            problems,
            vec![
                Problem::IllegalCharacter(1, 'ñ'),
                Problem::IllegalCharacter(4, '#'),
            ]
        );
    }

    #[test]
    fn byte_order_mark() {
        assert_eq!(illegal_characters("\u{feff}void climb() {}\n").count(), 0);
    }

    #[test]
    fn clean_text() {
        assert_eq!(illegal_characters("move();\n").count(), 0);
        assert_eq!(illegal_characters("").count(), 0);
    }
}
