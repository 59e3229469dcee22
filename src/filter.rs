//! Word filtering module
//!
//! Decides whether a candidate word belongs in the dictionary. The checks run in a
//! fixed order: length range, valid characters, then unique-letter count.

use crate::layout::ValidChars;

use ahash::RandomState;
use hashbrown::HashSet;
use std::fmt;

/// Shortest word kept
pub const MIN_LENGTH: usize = 4;

/// Longest word kept
pub const MAX_LENGTH: usize = 8;

/// Why a word was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Outside `MIN_LENGTH..=MAX_LENGTH`
    WrongLength(usize),
    /// Contains a character not on the keyboard
    InvalidChars,
    /// Too many repeated letters for its length
    TooFewUnique { unique: usize, length: usize },
}

impl Rejection {
    /// Length rejections are not reported to the user
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::WrongLength(_))
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(f, "length {}", len),
            Self::InvalidChars => write!(f, "invalid chars"),
            Self::TooFewUnique { .. } => write!(f, "not enough unique letters"),
        }
    }
}

/// Outcome of checking one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Kept, with its length in characters
    Accept(usize),
    Reject(Rejection),
}

/// Number of distinct characters in `word`
#[inline]
pub fn unique_letters(word: &str) -> usize {
    let mut seen = HashSet::with_capacity_and_hasher(MAX_LENGTH, RandomState::new());
    word.chars().filter(|c| seen.insert(*c)).count()
}

/// Fewest distinct characters a word of `length` may have.
///
/// A word needs strictly more than `length / 2` (rounded down) distinct letters,
/// so even lengths exclude exactly-half while odd lengths do not.
#[inline]
pub fn min_unique_letters(length: usize) -> usize {
    length / 2 + 1
}

/// Dictionary filter bound to one keyboard layout
#[derive(Debug, Clone)]
pub struct WordFilter {
    valid: ValidChars,
}

impl WordFilter {
    pub fn new(valid: ValidChars) -> Self {
        Self { valid }
    }

    /// Check an already-trimmed word
    pub fn check(&self, word: &str) -> Verdict {
        let length = word.chars().count();

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Verdict::Reject(Rejection::WrongLength(length));
        }

        if self.valid.first_invalid(word).is_some() {
            return Verdict::Reject(Rejection::InvalidChars);
        }

        let unique = unique_letters(word);
        if unique < min_unique_letters(length) {
            return Verdict::Reject(Rejection::TooFewUnique { unique, length });
        }

        Verdict::Accept(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(chars: &[&str]) -> WordFilter {
        WordFilter::new(ValidChars::from_rows(vec![chars.to_vec()]))
    }

    fn abcder() -> WordFilter {
        filter(&["a", "b", "c", "d", "e", "r"])
    }

    #[test]
    fn test_accept() {
        assert_eq!(abcder().check("cabbed"), Verdict::Accept(6));
        assert_eq!(abcder().check("bread"), Verdict::Accept(5));
    }

    #[test]
    fn test_wrong_length_is_silent() {
        let f = abcder();

        let short = f.check("hi");
        assert_eq!(short, Verdict::Reject(Rejection::WrongLength(2)));

        let long = f.check("abracadabra");
        assert_eq!(long, Verdict::Reject(Rejection::WrongLength(11)));

        assert!(Rejection::WrongLength(2).is_silent());
        assert!(!Rejection::InvalidChars.is_silent());
    }

    #[test]
    fn test_length_checked_before_chars() {
        // "xyz" is both too short and invalid; only the length counts
        assert_eq!(abcder().check("xyz"), Verdict::Reject(Rejection::WrongLength(3)));
    }

    #[test]
    fn test_invalid_chars() {
        let verdict = abcder().check("caved");
        assert_eq!(verdict, Verdict::Reject(Rejection::InvalidChars));
        assert_eq!(Rejection::InvalidChars.to_string(), "invalid chars");
    }

    #[test]
    fn test_not_enough_unique() {
        let verdict = abcder().check("abba");
        assert_eq!(
            verdict,
            Verdict::Reject(Rejection::TooFewUnique { unique: 2, length: 4 })
        );
        assert_eq!(
            Rejection::TooFewUnique { unique: 2, length: 4 }.to_string(),
            "not enough unique letters"
        );
    }

    #[test]
    fn test_invalid_chars_checked_before_unique() {
        assert_eq!(abcder().check("vvvv"), Verdict::Reject(Rejection::InvalidChars));
    }

    #[test]
    fn test_deadbeef_depends_on_layout() {
        assert_eq!(abcder().check("deadbeef"), Verdict::Reject(Rejection::InvalidChars));

        let with_f = filter(&["a", "b", "d", "e", "f"]);
        assert_eq!(with_f.check("deadbeef"), Verdict::Accept(8));
    }

    #[test]
    fn test_unique_threshold() {
        assert_eq!(min_unique_letters(4), 3);
        assert_eq!(min_unique_letters(5), 3);
        assert_eq!(min_unique_letters(6), 4);
        assert_eq!(min_unique_letters(7), 4);
        assert_eq!(min_unique_letters(8), 5);

        let f = abcder();
        // odd length at exactly 3 of 5 unique passes, even length at half fails
        assert_eq!(f.check("abbaa"), Verdict::Reject(Rejection::TooFewUnique { unique: 2, length: 5 }));
        assert_eq!(f.check("abcaa"), Verdict::Accept(5));
        assert_eq!(f.check("abcabc"), Verdict::Reject(Rejection::TooFewUnique { unique: 3, length: 6 }));
        assert_eq!(f.check("abcdab"), Verdict::Accept(6));
    }

    #[test]
    fn test_unicode_length() {
        let f = filter(&["h", "ë", "l", "o"]);

        // 5 characters, 6 bytes
        assert_eq!(f.check("hëllo"), Verdict::Accept(5));
        assert_eq!(unique_letters("hëllo"), 4);
    }
}
