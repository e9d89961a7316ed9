//! Random bijective substitution keys.

use super::alphabet::Alphabet;
use crate::KitError;
use crate::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::collections::HashSet;

/// A bijection between an alphabet (plain) and a permutation of it
/// (encrypted).
///
/// # Examples
///
/// ```
/// use kitbag_core::keygen::Alphabet;
/// use kitbag_core::keygen::KeyMapping;
///
/// let key = KeyMapping::seeded(&Alphabet::default(), 7);
/// let secret = key.encrypt("hello");
/// assert_eq!(key.decrypt(&secret), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMapping {
    pairs: Vec<(char, char)>,
    encrypt: HashMap<char, char>,
    decrypt: HashMap<char, char>,
}

impl KeyMapping {
    /// Generates a uniformly random key over `alphabet` using `rng`.
    ///
    /// Every permutation of the alphabet is equally likely.
    pub fn generate<R: Rng + ?Sized>(alphabet: &Alphabet, rng: &mut R) -> Self {
        let mut shuffled = alphabet.chars().to_vec();
        shuffled.shuffle(rng);

        let pairs = alphabet.chars().iter().copied().zip(shuffled).collect();
        Self::from_permutation(pairs)
    }

    /// Generates a random key seeded from the thread-local RNG.
    #[must_use]
    pub fn random(alphabet: &Alphabet) -> Self {
        Self::generate(alphabet, &mut rand::thread_rng())
    }

    /// Generates a reproducible key from a numeric seed.
    #[must_use]
    pub fn seeded(alphabet: &Alphabet, seed: u64) -> Self {
        Self::generate(alphabet, &mut StdRng::seed_from_u64(seed))
    }

    /// Rebuilds a key from `(plain, encrypted)` pairs.
    ///
    /// The plain characters, in the given order, become the alphabet.
    ///
    /// # Errors
    ///
    /// Returns `KitError::InvalidKey` if the pairs are empty, repeat a plain
    /// or encrypted character, or the encrypted side is not a permutation of
    /// the plain side.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let pairs: Vec<(char, char)> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Err(KitError::InvalidKey {
                reason: "key has no pairs".into(),
            });
        }

        let mut plains = HashSet::with_capacity(pairs.len());
        let mut encrypted = HashSet::with_capacity(pairs.len());
        for &(p, e) in &pairs {
            if !plains.insert(p) {
                return Err(KitError::InvalidKey {
                    reason: format!("plain character '{p}' appears twice"),
                });
            }
            if !encrypted.insert(e) {
                return Err(KitError::InvalidKey {
                    reason: format!("encrypted character '{e}' appears twice"),
                });
            }
        }

        if let Some(stray) = encrypted.difference(&plains).next() {
            return Err(KitError::InvalidKey {
                reason: format!("encrypted character '{stray}' is not in the alphabet"),
            });
        }

        Ok(Self::from_permutation(pairs))
    }

    fn from_permutation(pairs: Vec<(char, char)>) -> Self {
        let encrypt = pairs.iter().copied().collect();
        let decrypt = pairs.iter().map(|&(p, e)| (e, p)).collect();
        Self {
            pairs,
            encrypt,
            decrypt,
        }
    }

    /// `(plain, encrypted)` pairs in alphabet order.
    #[must_use]
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// Number of pairs (the alphabet size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false` for a constructed key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encrypted counterpart of a plain character.
    #[must_use]
    pub fn encrypt_char(&self, plain: char) -> Option<char> {
        self.encrypt.get(&plain).copied()
    }

    /// Plain counterpart of an encrypted character.
    #[must_use]
    pub fn decrypt_char(&self, encrypted: char) -> Option<char> {
        self.decrypt.get(&encrypted).copied()
    }

    /// Substitutes every alphabet character; others pass through.
    #[must_use]
    pub fn encrypt(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt_char(c).unwrap_or(c))
            .collect()
    }

    /// Reverses [`encrypt`](Self::encrypt).
    #[must_use]
    pub fn decrypt(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.decrypt_char(c).unwrap_or(c))
            .collect()
    }
}
