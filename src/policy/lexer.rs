//! Policy tokenizer.
//!
//! A token is a maximal run of characters other than `:`, `=` and `>`. Each
//! token carries the separator that came *immediately* before it; earlier
//! separators are forgotten. That makes the relation positional rather than
//! token-gated:
//!
//! ```text
//! "a::b"  ->  a (first), "" (:), b (:)      one tier step for b
//! "a:>b"  ->  a (first), "" (:), b (>)      b only gets the rank step
//! ":a"    ->  "" (first), a (:)             a starts one tier down
//! "a:"    ->  a (first)                     trailing separator is dropped
//! ```
//!
//! Empty tokens are still yielded so callers can count them.

use std::fmt;

/// How a token relates to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `=`, or no separator at all (first token).
    Equivalent,
    /// `>`: soft, one-directional preference.
    Preferred,
    /// `:`: hard tier boundary.
    Tier,
}

impl Relation {
    fn from_separator(sep: &str) -> Relation {
        match sep {
            ":" => Relation::Tier,
            ">" => Relation::Preferred,
            _ => Relation::Equivalent,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Relation::Equivalent => '=',
            Relation::Preferred => '>',
            Relation::Tier => ':',
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token and the relation that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub text: &'a str,
    pub relation: Relation,
    /// Byte offset of `text` in the policy.
    pub start: usize,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    relation: Relation,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0, relation: Relation::Equivalent }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.input[start..];
        let segment = match regex!(r"[:=>]").find(rest) {
            Some(sep) => {
                let segment = Segment { text: &rest[..sep.start()], relation: self.relation, start };
                self.relation = Relation::from_separator(sep.as_str());
                self.pos = start + sep.end();
                segment
            }
            None => {
                self.pos = self.input.len();
                Segment { text: rest, relation: self.relation, start }
            }
        };
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(&str, char)> {
        Lexer::new(input).map(|s| (s.text, s.relation.symbol())).collect()
    }

    #[test]
    fn splits_on_all_three_separators() {
        assert_eq!(lex("a=b:c>d"), vec![("a", '='), ("b", '='), ("c", ':'), ("d", '>')]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn only_the_last_separator_counts() {
        assert_eq!(lex("a::b"), vec![("a", '='), ("", ':'), ("b", ':')]);
        assert_eq!(lex("a:>b"), vec![("a", '='), ("", ':'), ("b", '>')]);
        assert_eq!(lex("a>=b"), vec![("a", '='), ("", '>'), ("b", '=')]);
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(lex(":a"), vec![("", '='), ("a", ':')]);
        assert_eq!(lex("a:"), vec![("a", '=')]);
        assert_eq!(lex(":::"), vec![("", '='), ("", ':'), ("", ':')]);
    }

    #[test]
    fn offsets_point_into_input() {
        let input = "x86_64:i686";
        let segs: Vec<Segment<'_>> = Lexer::new(input).collect();
        assert_eq!(segs[1].start, 7);
        assert_eq!(&input[segs[1].start..], "i686");
    }
}
