//! Ordered character set used as both sides of a substitution key.

use crate::KitError;
use crate::Result;
use std::collections::HashSet;

/// The default 89-character alphabet, in plain-side order.
pub const DEFAULT_ALPHABET: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!#$%&()*+,-./:;=?@^_`|~",
    "\"'<>",
);

/// An ordered sequence of distinct printable characters.
///
/// The order defines the plain side of a [`KeyMapping`](super::KeyMapping).
///
/// # Examples
///
/// ```
/// use kitbag_core::keygen::Alphabet;
///
/// let alphabet = Alphabet::default();
/// assert_eq!(alphabet.len(), 89);
/// assert!(alphabet.contains('"'));
///
/// assert!(Alphabet::new("abca").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a string, validating its characters.
    ///
    /// # Errors
    ///
    /// Returns `KitError::InvalidAlphabet` if the string is empty, contains a
    /// duplicate, or contains whitespace or control characters.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(KitError::InvalidAlphabet {
                reason: "alphabet is empty".into(),
            });
        }

        let mut seen = HashSet::new();
        for c in chars.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(KitError::InvalidAlphabet {
                    reason: format!("non-printable character U+{:04X}", u32::from(c)),
                });
            }
            if !seen.insert(c) {
                return Err(KitError::InvalidAlphabet {
                    reason: format!("duplicate character '{c}'"),
                });
            }
        }

        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; empty alphabets are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if `c` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Characters in plain-side order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
