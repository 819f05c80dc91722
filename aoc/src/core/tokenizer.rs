//! Lazy, allocation-free splitting of an [`InputView`] into [`Token`]s.
//!
//! [`next_token`] is the primitive: it takes the unconsumed suffix and returns
//! the next token together with the new suffix. [`Tokens`] wraps it as an
//! iterator for the common `for token in view.lines()` loop.

use std::iter::FusedIterator;

use super::delimiters::{DelimiterSet, Delimiters};
use super::view::{InputView, Token};

/// Extract the next token from `remaining`.
///
/// Returns `None` when `remaining` is empty, or when `skip_empty` is set and
/// only delimiters are left. The delimiter that ends a token is consumed and
/// belongs to neither the token nor the returned suffix.
pub fn next_token<'a, D>(
    remaining: InputView<'a>,
    delimiters: &D,
    skip_empty: bool,
) -> Option<(Token<'a>, InputView<'a>)>
where
    D: Delimiters + ?Sized,
{
    let mut rest = remaining.as_bytes();
    if rest.is_empty() {
        return None;
    }

    loop {
        let (token, next) = match delimiters.find_in(rest) {
            Some(end) => (&rest[..end], &rest[end + 1..]),
            None => (rest, &rest[rest.len()..]),
        };
        rest = next;

        if !token.is_empty() || !skip_empty {
            return Some((Token::new(token), InputView::new(rest)));
        }
        if rest.is_empty() {
            return None;
        }
    }
}

/// Iterator over the tokens of a view.
///
/// Holds the unconsumed suffix; once it yields `None` it keeps doing so.
#[derive(Debug)]
pub struct Tokens<'a, 'd, D: ?Sized> {
    remaining: InputView<'a>,
    delimiters: &'d D,
    skip_empty: bool,
}

// Only the reference to `D` is copied, so `D` need not be `Clone`.
impl<D: ?Sized> Clone for Tokens<'_, '_, D> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
            delimiters: self.delimiters,
            skip_empty: self.skip_empty,
        }
    }
}

impl<'a, 'd, D> Tokens<'a, 'd, D>
where
    D: Delimiters + ?Sized,
{
    pub fn new(input: InputView<'a>, delimiters: &'d D, skip_empty: bool) -> Self {
        Self {
            remaining: input,
            delimiters,
            skip_empty,
        }
    }

    /// The part of the input not consumed yet.
    pub fn remaining(&self) -> InputView<'a> {
        self.remaining
    }
}

impl<'a, D> Iterator for Tokens<'a, '_, D>
where
    D: Delimiters + ?Sized,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        match next_token(self.remaining, self.delimiters, self.skip_empty) {
            Some((token, rest)) => {
                self.remaining = rest;
                Some(token)
            }
            None => {
                self.remaining = InputView::default();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.remaining.len() + 1))
        }
    }
}

impl<D> FusedIterator for Tokens<'_, '_, D> where D: Delimiters + ?Sized {}

impl<'a> InputView<'a> {
    /// Non-empty tokens separated by any byte in `delimiters`.
    pub fn tokens<'d, D>(self, delimiters: &'d D) -> Tokens<'a, 'd, D>
    where
        D: Delimiters + ?Sized,
    {
        Tokens::new(self, delimiters, true)
    }

    /// All tokens, including empty ones between adjacent delimiters.
    pub fn fields<'d, D>(self, delimiters: &'d D) -> Tokens<'a, 'd, D>
    where
        D: Delimiters + ?Sized,
    {
        Tokens::new(self, delimiters, false)
    }

    /// Non-empty lines, split on `\r` and `\n`.
    pub fn lines(self) -> Tokens<'a, 'static, DelimiterSet> {
        Tokens::new(self, &DelimiterSet::LINES, true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::token_strings as collect;

    #[test]
    fn instructions_split_on_comma_and_space() {
        let tokens = collect("R8, R4, R4, R8", &DelimiterSet::COMMA_SPACE, true);
        assert_eq!(tokens, vec!["R8", "R4", "R4", "R8"]);
    }

    #[test]
    fn empty_fields_kept_unless_skipped() {
        assert_eq!(collect("a,,b", &b',', false), vec!["a", "", "b"]);
        assert_eq!(collect("a,,b", &b',', true), vec!["a", "b"]);
    }

    #[test]
    fn only_delimiters() {
        assert_eq!(collect(",,,", &b',', false), vec!["", "", ""]);
        assert!(collect(",,,", &b',', true).is_empty());
    }

    #[test]
    fn trailing_delimiter_produces_no_trailing_token() {
        assert_eq!(collect("a,b,", &b',', false), vec!["a", "b"]);
        assert_eq!(collect("a,,", &b',', false), vec!["a", ""]);
    }

    #[test]
    fn leading_delimiter_produces_empty_token() {
        assert_eq!(collect(",a", &b',', false), vec!["", "a"]);
        assert_eq!(collect(",a", &b',', true), vec!["a"]);
    }

    #[test]
    fn next_token_consumes_the_delimiter() {
        let view = InputView::from("ab,cd");
        let (token, rest) = next_token(view, &b',', false).expect("token");
        assert_eq!(token, "ab");
        assert_eq!(rest.as_bytes(), b"cd");
        let (token, rest) = next_token(rest, &b',', false).expect("token");
        assert_eq!(token, "cd");
        assert!(rest.is_empty());
    }

    #[test]
    fn exhausted_input_stays_exhausted() {
        let empty = InputView::default();
        for skip_empty in [false, true] {
            assert!(next_token(empty, &b',', skip_empty).is_none());
            assert!(next_token(empty, &DelimiterSet::LINES, skip_empty).is_none());
        }

        let mut tokens = InputView::from("x").tokens(&b' ');
        assert_eq!(tokens.next().map(|t| t.to_string()), Some("x".to_string()));
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
        assert!(tokens.remaining().is_empty());
    }

    #[test]
    fn lines_handle_crlf_and_blank_lines() {
        let view = InputView::from("ULL\r\nRRDDD\n\nLURDL\nUUUUD");
        let lines: Vec<String> = view.lines().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["ULL", "RRDDD", "LURDL", "UUUUD"]);
    }

    #[test]
    fn nested_tokenizing_of_a_line() {
        let view = InputView::from("5 10 25\n15 15 25");
        let rows: Vec<Vec<String>> = view
            .lines()
            .map(|line| {
                line.as_view()
                    .tokens(&b' ')
                    .map(|t| t.to_string())
                    .collect()
            })
            .collect();
        assert_eq!(rows, vec![vec!["5", "10", "25"], vec!["15", "15", "25"]]);
    }

    #[test]
    fn clones_advance_independently() {
        let mut words = InputView::from("a b c").tokens(" ");
        assert_eq!(words.next().map(|t| t.to_string()), Some("a".to_string()));
        let rest: Vec<String> = words.clone().map(|t| t.to_string()).collect();
        assert_eq!(rest, vec!["b", "c"]);
        assert_eq!(words.next().map(|t| t.to_string()), Some("b".to_string()));

        let is_comma = |b: u8| b == b',';
        let fields = InputView::from("x,,y").fields(&is_comma);
        assert_eq!(fields.clone().count(), 3);
        assert_eq!(fields.count(), 3);
    }

    #[test]
    fn str_and_closure_delimiters_agree_with_set() {
        let input = "a b\tc\nd";
        let by_set = collect(input, &DelimiterSet::WHITESPACE, true);
        let by_str = collect(input, " \t\r\n", true);
        let by_closure = collect(input, &|b: u8| b.is_ascii_whitespace(), true);
        assert_eq!(by_set, by_str);
        assert_eq!(by_set, by_closure);
    }
}
