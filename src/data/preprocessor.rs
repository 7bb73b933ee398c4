// ============================================================
// Text Normaliser
// ============================================================
// Brings raw movie-script text into the small alphabet the
// vocabulary is built over.
//
// Steps (applied in order):
//   1. Lowercase and trim
//   2. Unicode NFD decomposition, then drop combining marks
//      ("café" → "cafe")
//   3. Put a space in front of every `.`, `!` and `?`;
//      a run of the same mark ("!!", "???") becomes one mark
//   4. Collapse every run of characters outside [a-zA-Z.!?]
//      into a single space
//   5. Delete periods: first " .", then any "." left
//   6. Trim
//
// Step 5 means sentence-final periods never reach the
// vocabulary, while "!" and "?" survive as their own tokens:
//
//   "Hello, World!!"   → "hello world !"
//   "Are you sure?"    → "are you sure ?"
//   "No. Not today."   → "no not today"
//
// The output is a fixed point: normalising it again changes
// nothing.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

lazy_static! {
    static ref TERMINAL_MARKS: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref OUTSIDE_ALPHABET: Regex = Regex::new(r"[^a-zA-Z.!?]+").unwrap();
}

pub struct Normalizer;

impl Normalizer {
    /// Create a new Normalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise one sentence. See the module header for the steps.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let ascii = strip_diacritics(lowered.trim());

        let spaced = TERMINAL_MARKS.replace_all(&ascii, |caps: &Captures| space_marks(&caps[0]));
        let collapsed = OUTSIDE_ALPHABET.replace_all(&spaced, " ");

        collapsed
            .replace(" .", "")
            .replace('.', "")
            .trim()
            .to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Decompose and drop the combining marks left behind
fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

/// " !" for "!!", " ? !" for "?!"
fn space_marks(run: &str) -> String {
    let mut out = String::with_capacity(run.len() * 2);
    let mut last = None;
    for c in run.chars() {
        if last != Some(c) {
            out.push(' ');
            out.push(c);
        }
        last = Some(c);
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        Normalizer::new().normalize(s)
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(norm("Hello, World!!"), "hello world !");
    }

    #[test]
    fn test_question_mark_kept_as_token() {
        assert_eq!(norm("Are you sure?"), "are you sure ?");
    }

    #[test]
    fn test_periods_vanish() {
        assert_eq!(norm("No. Not today."), "no not today");
        assert_eq!(norm("Wait..."), "wait");
    }

    #[test]
    fn test_mixed_marks_are_spaced() {
        assert_eq!(norm("What?!"), "what ? !");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(norm("Café NAÏVE"), "cafe naive");
    }

    #[test]
    fn test_digits_and_apostrophes_become_spaces() {
        assert_eq!(norm("I'm 42 years   old"), "i m years old");
    }

    #[test]
    fn test_trailing_comma_leaves_no_space() {
        assert_eq!(norm("well,"), "well");
        assert_eq!(norm("  ,  "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Hello, World!!",
            "They do not!",
            "Can we make this quick?  Roxanne Korrine and Andrew Barrett...",
            "Wait.. what?! No.",
            "!start",
            "l'été dernier, à Paris.",
            "",
            "   ",
            "a . b ! . c",
            "Ünïcödé ïs fün?!?",
        ];
        for s in samples {
            let once = norm(s);
            assert_eq!(norm(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(norm(""), "");
    }
}
