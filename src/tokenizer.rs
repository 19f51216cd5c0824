//! # Argument Tokenizer
//!
//! Command arguments arrive as one raw string in which named values are
//! introduced by short prefix markers such as `n/` or `c/`. This module
//! splits such a string into a preamble (the text before the first
//! recognized marker) and, for each marker, the text running up to the next
//! marker or the end of the string, with surrounding whitespace trimmed.
//!
//! Tokenization is purely syntactic and infallible: it never validates
//! values and never touches the model. Two distinctions matter to callers:
//!
//! - A prefix that never appears is *absent* ([`TokenizedArguments::value`]
//!   returns `None`); a prefix followed by nothing but whitespace is
//!   *present with an empty value* (`Some("")`).
//! - When the same single-valued prefix appears more than once, the first
//!   occurrence is authoritative and later duplicates are ignored.
//!   Repeatable prefixes read every occurrence, in input order, through
//!   [`TokenizedArguments::all_values`].
//!
//! A marker only counts when it starts the string or follows whitespace, so
//! values may freely contain slashes (`a/Blk 30/2 Geylang` keeps `30/2`).

use std::fmt::{Display, Formatter, Result as FmtResult};

/////////////////////////////////////////////// Prefix ///////////////////////////////////////////////

/// A prefix marker that introduces a named argument value, such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Creates a new prefix from its literal marker text.
    pub const fn new(marker: &'static str) -> Self {
        Prefix(marker)
    }

    /// Returns the literal marker text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////// TokenizedArguments ////////////////////////////////////////

/// The result of tokenizing a raw argument string.
///
/// Holds the trimmed preamble and every recognized `(prefix, value)` pair in
/// input order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedArguments {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl TokenizedArguments {
    /// Returns the trimmed text that appeared before the first marker.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the trimmed value of the first occurrence of the prefix, or
    /// `None` when the prefix is absent entirely.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the trimmed values of every occurrence of the prefix, in
    /// input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

////////////////////////////////////////////// tokenize //////////////////////////////////////////////

/// Tokenizes a raw argument string against a set of recognized prefixes.
///
/// # Arguments
/// * `args` - The raw argument string, everything after the command word
/// * `prefixes` - The prefixes this command recognizes
///
/// # Examples
///
/// ```rust
/// use rosterbook::{Prefix, tokenize};
///
/// const NAME: Prefix = Prefix::new("n/");
/// const CLASS: Prefix = Prefix::new("c/");
///
/// let tokens = tokenize(" n/Alice Tan c/CS2103T ", &[NAME, CLASS]);
/// assert_eq!(tokens.preamble(), "");
/// assert_eq!(tokens.value(NAME), Some("Alice Tan"));
/// assert_eq!(tokens.value(CLASS), Some("CS2103T"));
/// ```
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> TokenizedArguments {
    let mut markers: Vec<(usize, Prefix)> = Vec::new();

    for &prefix in prefixes {
        let marker = prefix.as_str();
        let mut search_from = 0;
        while let Some(found) = args[search_from..].find(marker) {
            let pos = search_from + found;
            // A marker must start the string or follow whitespace.
            if pos == 0 || args[..pos].ends_with(char::is_whitespace) {
                markers.push((pos, prefix));
            }
            search_from = pos + marker.len();
        }
    }

    markers.sort_by_key(|(pos, _)| *pos);

    let preamble_end = markers.first().map_or(args.len(), |(pos, _)| *pos);
    let preamble = args[..preamble_end].trim().to_string();

    let values = markers
        .iter()
        .enumerate()
        .map(|(i, (pos, prefix))| {
            let value_start = pos + prefix.as_str().len();
            let value_end = markers.get(i + 1).map_or(args.len(), |(next, _)| *next);
            (*prefix, args[value_start..value_end].trim().to_string())
        })
        .collect();

    TokenizedArguments { preamble, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: Prefix = Prefix::new("n/");
    const CLASS: Prefix = Prefix::new("c/");
    const TAG: Prefix = Prefix::new("t/");

    #[test]
    fn empty_input_yields_nothing() {
        let tokens = tokenize("", &[NAME, CLASS]);
        assert_eq!(tokens.preamble(), "");
        assert_eq!(tokens.value(NAME), None);
        assert_eq!(tokens.value(CLASS), None);
    }

    #[test]
    fn whitespace_only_input_behaves_like_empty_input() {
        let tokens = tokenize("   \t  ", &[NAME, CLASS]);
        assert_eq!(tokens.preamble(), "");
        assert_eq!(tokens.value(NAME), None);
    }

    #[test]
    fn splits_values_at_the_next_marker() {
        let tokens = tokenize("n/Alice Tan c/CS2103T", &[NAME, CLASS]);
        assert_eq!(tokens.preamble(), "");
        assert_eq!(tokens.value(NAME), Some("Alice Tan"));
        assert_eq!(tokens.value(CLASS), Some("CS2103T"));
    }

    #[test]
    fn trims_surrounding_whitespace_but_keeps_interior_spaces() {
        let tokens = tokenize("  n/  Alice   Tan   c/ CS2103T  ", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some("Alice   Tan"));
        assert_eq!(tokens.value(CLASS), Some("CS2103T"));
    }

    #[test]
    fn preamble_is_the_text_before_the_first_marker() {
        let tokens = tokenize("some preamble n/Alice c/CS2103T", &[NAME, CLASS]);
        assert_eq!(tokens.preamble(), "some preamble");
        assert_eq!(tokens.value(NAME), Some("Alice"));
    }

    #[test]
    fn marker_order_in_the_input_does_not_matter() {
        let tokens = tokenize("c/CS2103T n/Alice Tan", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some("Alice Tan"));
        assert_eq!(tokens.value(CLASS), Some("CS2103T"));
    }

    #[test]
    fn empty_value_is_distinct_from_absent_prefix() {
        let tokens = tokenize("n/ c/CS2103T", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some(""));
        assert_eq!(tokens.value(CLASS), Some("CS2103T"));

        let tokens = tokenize("c/CS2103T", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), None);
    }

    #[test]
    fn trailing_marker_yields_an_empty_value() {
        let tokens = tokenize("n/Alice c/", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some("Alice"));
        assert_eq!(tokens.value(CLASS), Some(""));
    }

    #[test]
    fn first_occurrence_of_a_duplicate_prefix_wins() {
        let tokens = tokenize("n/Alice n/Bob c/CS2103T", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some("Alice"));
        assert_eq!(tokens.value(CLASS), Some("CS2103T"));
    }

    #[test]
    fn all_values_preserves_every_occurrence_in_order() {
        let tokens = tokenize("t/exam n/Alice t/weekday", &[NAME, TAG]);
        assert_eq!(tokens.all_values(TAG), vec!["exam", "weekday"]);
        assert_eq!(tokens.all_values(NAME), vec!["Alice"]);
        assert!(tokens.all_values(CLASS).is_empty());
    }

    #[test]
    fn marker_mid_word_is_not_recognized() {
        // "Tan/c" contains "n/" but not after whitespace.
        let tokens = tokenize("c/CS2103T x Tan/c", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), None);
        assert_eq!(tokens.value(CLASS), Some("CS2103T x Tan/c"));
    }

    #[test]
    fn values_may_contain_slashes() {
        let tokens = tokenize("n/Alice s/o Tan c/CS2103T", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some("Alice s/o Tan"));
    }

    #[test]
    fn unrecognized_markers_stay_in_values() {
        let tokens = tokenize("n/Alice p/999", &[NAME, CLASS]);
        assert_eq!(tokens.value(NAME), Some("Alice p/999"));
    }

    #[test]
    fn marker_at_position_zero_is_recognized() {
        let tokens = tokenize("n/Alice", &[NAME, CLASS]);
        assert_eq!(tokens.preamble(), "");
        assert_eq!(tokens.value(NAME), Some("Alice"));
    }
}
