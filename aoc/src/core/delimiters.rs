//! Delimiter predicates for the tokenizer.
//!
//! A single [`Delimiters`] trait replaces the per-shape overloads (one char,
//! a char list, a line break): anything that can answer "does this byte end a
//! token" can drive the tokenizer.

/// Byte predicate deciding where tokens end.
pub trait Delimiters {
    fn is_delimiter(&self, byte: u8) -> bool;

    /// Position of the first delimiter in `haystack`.
    ///
    /// Implementations with a small fixed byte set override this with a
    /// `memchr` search.
    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        haystack.iter().position(|&b| self.is_delimiter(b))
    }
}

impl Delimiters for u8 {
    fn is_delimiter(&self, byte: u8) -> bool {
        *self == byte
    }

    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        memchr::memchr(*self, haystack)
    }
}

impl Delimiters for [u8] {
    fn is_delimiter(&self, byte: u8) -> bool {
        self.contains(&byte)
    }

    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        match *self {
            [] => None,
            [a] => memchr::memchr(a, haystack),
            [a, b] => memchr::memchr2(a, b, haystack),
            [a, b, c] => memchr::memchr3(a, b, c, haystack),
            _ => haystack.iter().position(|&b| self.is_delimiter(b)),
        }
    }
}

impl<const N: usize> Delimiters for [u8; N] {
    fn is_delimiter(&self, byte: u8) -> bool {
        self.as_slice().is_delimiter(byte)
    }

    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        self.as_slice().find_in(haystack)
    }
}

impl Delimiters for str {
    fn is_delimiter(&self, byte: u8) -> bool {
        self.as_bytes().is_delimiter(byte)
    }

    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        self.as_bytes().find_in(haystack)
    }
}

impl<F> Delimiters for F
where
    F: Fn(u8) -> bool,
{
    fn is_delimiter(&self, byte: u8) -> bool {
        self(byte)
    }
}

/// Immutable set of delimiter bytes with constant-time membership.
///
/// Sets of up to three bytes also keep their members in ascending order so
/// searches can go through `memchr`.
#[derive(Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    table: [bool; 256],
    few: [u8; 3],
    len: u16,
}

impl DelimiterSet {
    /// Carriage return and line feed.
    pub const LINES: DelimiterSet = DelimiterSet::new(b"\r\n");
    /// Comma and space, as in `R8, R4, L2`.
    pub const COMMA_SPACE: DelimiterSet = DelimiterSet::new(b", ");
    /// Space, tab, carriage return and line feed.
    pub const WHITESPACE: DelimiterSet = DelimiterSet::new(b" \t\r\n");

    pub const fn new(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            i += 1;
        }

        let mut few = [0; 3];
        let mut len = 0_u16;
        let mut b = 0;
        while b < table.len() {
            if table[b] {
                if (len as usize) < few.len() {
                    few[len as usize] = b as u8;
                }
                len += 1;
            }
            b += 1;
        }
        Self { table, few, len }
    }

    pub const fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    /// Number of distinct bytes in the set.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending byte order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl Delimiters for DelimiterSet {
    fn is_delimiter(&self, byte: u8) -> bool {
        self.contains(byte)
    }

    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        match (self.len, self.few) {
            (0, _) => None,
            (1, [a, ..]) => memchr::memchr(a, haystack),
            (2, [a, b, _]) => memchr::memchr2(a, b, haystack),
            (3, [a, b, c]) => memchr::memchr3(a, b, c, haystack),
            _ => haystack.iter().position(|&b| self.contains(b)),
        }
    }
}

impl From<&str> for DelimiterSet {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<&[u8]> for DelimiterSet {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.bytes().map(|b| b.escape_ascii().to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_membership_ignores_order_and_duplicates() {
        let set = DelimiterSet::new(b" ,, ");
        assert!(set.contains(b','));
        assert!(set.contains(b' '));
        assert!(!set.contains(b'R'));
        assert_eq!(set.len(), 2);
        assert_eq!(set, DelimiterSet::COMMA_SPACE);
    }

    #[test]
    fn slice_fast_path_matches_predicate() {
        let haystack = b"ab cd,ef\ngh";
        let sets: [&[u8]; 5] = [b"", b",", b", ", b", \n", b", \n\t"];
        for set in sets {
            let expected = haystack.iter().position(|b| set.contains(b));
            assert_eq!(set.find_in(haystack), expected, "set {:?}", set);
        }
    }

    #[test]
    fn set_search_matches_predicate() {
        let haystack = b"R8, R4\tL2\r\nU1 ,x";
        let sets = [
            DelimiterSet::new(b"\n"),
            DelimiterSet::LINES,
            DelimiterSet::COMMA_SPACE,
            DelimiterSet::new(b"\n, "),
            DelimiterSet::WHITESPACE,
            DelimiterSet::new(b"x"),
        ];
        for set in &sets {
            for start in 0..=haystack.len() {
                let slice = &haystack[start..];
                let expected = slice.iter().position(|&b| set.contains(b));
                assert_eq!(set.find_in(slice), expected, "set {:?} from {}", set, start);
            }
        }
    }

    #[test]
    fn set_len_counts_distinct_members() {
        assert_eq!(DelimiterSet::LINES.len(), 2);
        assert_eq!(DelimiterSet::WHITESPACE.len(), 4);
        assert_eq!(DelimiterSet::new(b"\n\r\n").few, DelimiterSet::LINES.few);
    }

    #[test]
    fn closure_acts_as_delimiter() {
        let digits = |b: u8| b.is_ascii_digit();
        assert_eq!(digits.find_in(b"abc1"), Some(3));
        assert!(digits.is_delimiter(b'7'));
    }

    #[test]
    fn empty_set_has_no_members() {
        let set = DelimiterSet::from("");
        assert!(set.is_empty());
        assert_eq!(set.find_in(b"a b"), None);
    }
}
