//! Plugboard: operator-configured letter swaps on the way in and out.

use crate::{
    alphabet::{ALPHABET_LEN, Letter, Permutation},
    error::ConfigError,
};

/// Pairwise letter swaps.
///
/// Unplugged letters map to themselves. Each letter is in at most one pair,
/// so the mapping is always an involution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: Permutation,
    pairs: Vec<(Letter, Letter)>,
}

impl Plugboard {
    /// A plugboard with no cables.
    pub fn identity() -> Self {
        Self { mapping: Permutation::identity(), pairs: Vec::new() }
    }

    /// Parses whitespace-separated two-letter pairs, e.g. `"AB CD ef"`.
    ///
    /// Letters are case-insensitive. An empty or blank string yields the
    /// identity plugboard.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MalformedPlugPair`] if a token is not exactly two
    ///   letters
    /// - [`ConfigError::DuplicatePlug`] if a letter appears in more than one
    ///   pair, or twice in the same pair
    pub fn parse(config: &str) -> Result<Self, ConfigError> {
        let mut board = Self::identity();
        let mut used = [false; ALPHABET_LEN];

        for token in config.split_whitespace() {
            let upper = token.to_ascii_uppercase();
            let mut chars = upper.chars().map(Letter::from_char);
            let (Some(Some(a)), Some(Some(b)), None) = (chars.next(), chars.next(), chars.next())
            else {
                return Err(ConfigError::MalformedPlugPair { pair: token.to_string() });
            };

            for letter in [a, b] {
                if used[letter.index()] {
                    return Err(ConfigError::DuplicatePlug { letter: letter.to_char() });
                }
                used[letter.index()] = true;
            }

            board.mapping.swap(a, b);
            board.pairs.push((a, b));
        }

        Ok(board)
    }

    /// Letter after passing through the plugboard.
    pub fn swap(&self, letter: Letter) -> Letter {
        self.mapping.apply(letter)
    }

    /// Configured pairs, in the order given.
    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    /// Number of cables.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no cables are plugged.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The full mapping.
    pub fn mapping(&self) -> &Permutation {
        &self.mapping
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}
