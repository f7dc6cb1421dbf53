//! Alphabet arithmetic and letter permutations.
//!
//! A [`Letter`] is an index into the 26-letter Latin alphabet. All rotor
//! arithmetic is done on these indices modulo 26, and every wiring table is a
//! [`Permutation`] over them.

use std::fmt;

use crate::error::{ConfigError, PermutationDefect};

/// Number of letters on every rotor, reflector and plugboard.
pub const ALPHABET_LEN: usize = 26;

/// A letter `A..=Z`, stored as its zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Self = Self(0);

    /// Converts an uppercase ASCII letter. Anything else yields `None`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() { Some(Self(c as u8 - b'A')) } else { None }
    }

    /// Letter at `index`, reduced modulo 26.
    pub fn from_index(index: usize) -> Self {
        Self((index % ALPHABET_LEN) as u8)
    }

    /// Zero-based index (`A` = 0).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Zero-based index as a signed offset, for modular arithmetic.
    pub fn ordinal(self) -> i32 {
        i32::from(self.0)
    }

    /// The uppercase ASCII character for this letter.
    pub fn to_char(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Shifts this letter by `delta` places around the alphabet, wrapping in
    /// both directions.
    pub fn offset(self, delta: i32) -> Self {
        Self((self.ordinal() + delta).rem_euclid(ALPHABET_LEN as i32) as u8)
    }

    /// All 26 letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A bijection from the alphabet onto itself.
///
/// Entry `i` is the image of the `i`-th letter, so the table string
/// `"EKMF..."` maps `A -> E`, `B -> K`, `C -> M` and so on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([Letter; ALPHABET_LEN]);

impl Permutation {
    /// The identity mapping.
    pub fn identity() -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            table[letter.index()] = letter;
        }
        Self(table)
    }

    /// Parses a 26-character table of images.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPermutation`] if the table is not
    /// exactly 26 letters `A..=Z` with no repeats.
    pub fn parse(table: &str) -> Result<Self, ConfigError> {
        let invalid =
            |defect| ConfigError::InvalidPermutation { table: table.to_string(), defect };

        let len = table.chars().count();
        if len != ALPHABET_LEN {
            return Err(invalid(PermutationDefect::WrongLength { len }));
        }

        let mut images = [Letter::A; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (offset, ch) in table.chars().enumerate() {
            let letter = Letter::from_char(ch)
                .ok_or_else(|| invalid(PermutationDefect::NotALetter { ch, offset }))?;
            if seen[letter.index()] {
                return Err(invalid(PermutationDefect::Repeated { letter: ch }));
            }
            seen[letter.index()] = true;
            images[offset] = letter;
        }

        Ok(Self(images))
    }

    /// Image of `letter`.
    pub fn apply(&self, letter: Letter) -> Letter {
        self.0[letter.index()]
    }

    /// The inverse mapping: `p.inverse().apply(p.apply(x)) == x`.
    pub fn inverse(&self) -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            table[self.apply(letter).index()] = letter;
        }
        Self(table)
    }

    /// Composition: applies `self` first, then `next`.
    pub fn then(&self, next: &Self) -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            table[letter.index()] = next.apply(self.apply(letter));
        }
        Self(table)
    }

    /// Swaps the images of `a` and `b`.
    pub(crate) fn swap(&mut self, a: Letter, b: Letter) {
        self.0.swap(a.index(), b.index());
    }

    /// True if every letter maps to itself.
    pub fn is_identity(&self) -> bool {
        Letter::all().all(|letter| self.apply(letter) == letter)
    }

    /// True if the mapping is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.then(self).is_identity()
    }

    /// Number of letters that map to themselves.
    pub fn fixed_points(&self) -> usize {
        Letter::all().filter(|&letter| self.apply(letter) == letter).count()
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation({self})")
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}
