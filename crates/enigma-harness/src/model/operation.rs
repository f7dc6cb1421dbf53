//! Operations for model-based testing.
//!
//! Operations represent everything an operator can do to a configured
//! machine. They are generated randomly by proptest (or the fuzzer) and
//! applied to both the model and the real implementation.

use arbitrary::Arbitrary;

/// Non-letter characters used by [`Operation::PressOther`] and [`SmallText`].
const OTHER_KEYS: &[char] = &[' ', '.', ',', '?', '!', '0', '7', '-', '\n', 'é', 'ß'];

/// Operations that can be applied to a machine.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Press a letter key (`key % 26` selects the letter).
    Press {
        /// Letter selector.
        key: u8,
    },

    /// Press a key that is not a letter `A..=Z`.
    ///
    /// Must echo the character and leave the rotors alone.
    PressOther {
        /// Character selector.
        key: u8,
    },

    /// Type a short mixed-case message.
    Type {
        /// Message content.
        text: SmallText,
    },

    /// Return the rotors to the positions the machine was configured with.
    Rewind,

    /// Turn the rotors by hand to new positions (`% 26` per slot).
    Jump {
        /// Position selectors, slow to fast.
        positions: [u8; 3],
    },
}

impl Operation {
    /// The letter for [`Operation::Press`].
    pub fn press_char(key: u8) -> char {
        char::from(b'A' + key % 26)
    }

    /// The character for [`Operation::PressOther`].
    pub fn other_char(key: u8) -> char {
        OTHER_KEYS[usize::from(key) % OTHER_KEYS.len()]
    }
}

/// Short message content for testing.
///
/// The content is deterministic from the seed and mixes upper- and lowercase
/// letters with punctuation, digits and non-ASCII characters.
#[derive(Debug, Clone, Arbitrary)]
pub struct SmallText {
    /// Content seed.
    pub seed: u8,
    /// Length in characters (taken modulo 64).
    pub len: u8,
}

impl SmallText {
    /// Expand to the actual message.
    pub fn to_text(&self) -> String {
        (0..usize::from(self.len % 64))
            .map(|i| {
                let k = self.seed.wrapping_mul(31).wrapping_add((i as u8).wrapping_mul(7));
                match k % 5 {
                    0 => Operation::other_char(k),
                    1 => char::from(b'a' + k % 26),
                    _ => char::from(b'A' + k % 26),
                }
            })
            .collect()
    }
}

/// Result of applying an operation.
///
/// Used to compare model and real machine behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Text produced by a key press or message.
    Output(String),

    /// Rotors were repositioned; nothing was printed.
    Moved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_char_covers_alphabet() {
        assert_eq!(Operation::press_char(0), 'A');
        assert_eq!(Operation::press_char(25), 'Z');
        assert_eq!(Operation::press_char(26), 'A');
    }

    #[test]
    fn other_char_is_never_an_uppercase_letter() {
        for key in 0..=u8::MAX {
            assert!(!Operation::other_char(key).is_ascii_uppercase());
        }
    }

    #[test]
    fn small_text_is_deterministic() {
        let text = SmallText { seed: 9, len: 40 };
        assert_eq!(text.to_text(), text.to_text());
        assert_eq!(text.to_text().chars().count(), 40);
        assert_eq!(SmallText { seed: 9, len: 64 }.to_text(), "");
    }
}
