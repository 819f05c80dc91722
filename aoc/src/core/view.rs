//! Borrowed byte windows over puzzle input.
//!
//! [`InputView`] and [`Token`] never own their bytes. The lifetime parameter
//! ties them to whatever holds the storage (a sample string, an owned buffer
//! or a mapped file), so neither can outlive it.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// Immutable, non-owning view over a contiguous byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputView<'a> {
    bytes: &'a [u8],
}

impl<'a> InputView<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Split at `at`, returning `[0, at)` and `[at, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `at > self.len()`.
    pub fn split_at(&self, at: usize) -> (InputView<'a>, InputView<'a>) {
        let (head, tail) = self.bytes.split_at(at);
        (InputView::new(head), InputView::new(tail))
    }

    /// Returns true if `token` points into this view's storage.
    pub fn contains(&self, token: &Token<'_>) -> bool {
        let outer = self.bytes.as_ptr_range();
        let inner = token.as_bytes().as_ptr_range();
        outer.start <= inner.start && inner.end <= outer.end
    }
}

impl<'a> From<&'a str> for InputView<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for InputView<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for InputView<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::new(value)
    }
}

impl Deref for InputView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

/// A sub-view of an [`InputView`] bounded by delimiters or the input ends.
///
/// Tokens may be empty. Comparing against `&str` compares bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Token<'a> {
    bytes: &'a [u8],
}

impl<'a> Token<'a> {
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The token as UTF-8, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.bytes).ok()
    }

    pub fn to_str_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Drop the first `n` bytes, e.g. the `R` of `R8`.
    ///
    /// Returns an empty token when `n` exceeds the length.
    pub fn skip(&self, n: usize) -> Token<'a> {
        Token::new(self.bytes.get(n..).unwrap_or_default())
    }

    pub fn first(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Re-view the token as input for a nested tokenizer pass.
    pub const fn as_view(&self) -> InputView<'a> {
        InputView::new(self.bytes)
    }
}

impl Deref for Token<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?})", self.to_str_lossy())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}
