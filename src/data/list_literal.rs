// ============================================================
// Conversation List Literal Parser
// ============================================================
// The last field of every conversations record is a list of
// quoted line ids written as a literal:
//
//   ['L194', 'L195', 'L196', 'L197']
//
// Grammar accepted here:
//
//   list  := ws '[' ws ( item ( ws ',' ws item )* ( ws ',' )? )? ws ']' ws
//   item  := '\'' chars '\''  |  '"' chars '"'
//
// Inside quotes a backslash escapes the next character.
// Anything else — bare words, numbers, nested lists, text after
// the closing bracket — is rejected with a typed error.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("expected '{expected}' but found {found}")]
    Expected { expected: char, found: String },

    #[error("expected a quoted id or ']' but found '{0}'")]
    NotAString(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("missing closing ']'")]
    UnterminatedList,

    #[error("unexpected '{0}' after the closing ']'")]
    TrailingInput(char),
}

/// Parse a list literal of quoted strings into owned ids.
pub fn parse_string_list(input: &str) -> Result<Vec<String>, LiteralError> {
    let mut chars = input.chars().peekable();

    // ── Step 1: opening bracket ──
    // A blank field fails here with "found end of input"
    skip_whitespace(&mut chars);
    match chars.next() {
        Some('[') => {}
        other => {
            return Err(LiteralError::Expected {
                expected: '[',
                found:    describe(other),
            })
        }
    }

    // ── Step 2: items until the closing bracket ──
    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.peek().copied() {
            // Empty list, or a trailing comma before ']'
            Some(']') => {
                chars.next();
                break;
            }
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                items.push(parse_quoted(&mut chars, quote)?);

                // After an item only a separator or the end may follow
                skip_whitespace(&mut chars);
                match chars.next() {
                    Some(',') => continue,
                    Some(']') => break,
                    Some(c) => {
                        return Err(LiteralError::Expected {
                            expected: ']',
                            found:    format!("'{c}'"),
                        })
                    }
                    None => return Err(LiteralError::UnterminatedList),
                }
            }
            // Bare words, numbers, nested lists, a lone ','
            Some(c) => return Err(LiteralError::NotAString(c)),
            None => return Err(LiteralError::UnterminatedList),
        }
    }

    // ── Step 3: nothing but whitespace after ']' ──
    skip_whitespace(&mut chars);
    match chars.next() {
        None => Ok(items),
        Some(c) => Err(LiteralError::TrailingInput(c)),
    }
}

/// Read characters up to the matching `quote`; the opening quote
/// has already been consumed.
fn parse_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, LiteralError> {
    let mut out = String::new();
    loop {
        match chars.next() {
            // Backslash keeps the next character verbatim, quotes included
            Some('\\') => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(LiteralError::UnterminatedString),
            },
            Some(c) if c == quote => return Ok(out),
            Some(c) => out.push(c),
            None => return Err(LiteralError::UnterminatedString),
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn describe(c: Option<char>) -> String {
    match c {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cornell_style_list() {
        let ids = parse_string_list("['L194', 'L195', 'L196', 'L197']").unwrap();
        assert_eq!(ids, vec!["L194", "L195", "L196", "L197"]);
    }

    #[test]
    fn test_surrounding_whitespace_and_newline() {
        let ids = parse_string_list("  [ 'L1' ,'L2' ]\n").unwrap();
        assert_eq!(ids, vec!["L1", "L2"]);
    }

    #[test]
    fn test_double_quotes_and_escapes() {
        let ids = parse_string_list(r#"["L1", 'it\'s']"#).unwrap();
        assert_eq!(ids, vec!["L1", "it's"]);
    }

    #[test]
    fn test_empty_list_and_trailing_comma() {
        assert!(parse_string_list("[]").unwrap().is_empty());
        assert_eq!(parse_string_list("['L1',]").unwrap(), vec!["L1"]);
    }

    #[test]
    fn test_rejects_bare_words() {
        assert_eq!(parse_string_list("[L1, L2]"), Err(LiteralError::NotAString('L')));
    }

    #[test]
    fn test_rejects_missing_bracket() {
        assert!(matches!(
            parse_string_list("'L1', 'L2'"),
            Err(LiteralError::Expected { expected: '[', .. })
        ));
        assert_eq!(parse_string_list("['L1'"), Err(LiteralError::UnterminatedList));
    }

    #[test]
    fn test_rejects_unterminated_string() {
        assert_eq!(parse_string_list("['L1]"), Err(LiteralError::UnterminatedString));
    }

    #[test]
    fn test_rejects_trailing_input() {
        assert_eq!(parse_string_list("['L1'] x"), Err(LiteralError::TrailingInput('x')));
    }

    #[test]
    fn test_rejects_lone_comma() {
        assert_eq!(parse_string_list("[,]"), Err(LiteralError::NotAString(',')));
    }

    #[test]
    fn test_rejects_empty_field() {
        assert!(parse_string_list("").is_err());
    }
}
