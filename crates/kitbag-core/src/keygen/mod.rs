//! Substitution key generation.
//!
//! Builds a random bijection over a fixed printable alphabet and renders it
//! as a decrypt map and a pair set. The cipher is a toy: it offers no
//! cryptographic strength.

pub mod alphabet;
pub mod literal;
pub mod mapping;

pub use alphabet::Alphabet;
pub use alphabet::DEFAULT_ALPHABET;
pub use mapping::KeyMapping;

/// A generated key together with its two rendered literals.
#[derive(Debug, Clone)]
pub struct GeneratedKey {
    /// The key itself.
    pub mapping: KeyMapping,
    /// `{'E':'P', ...}` literal for decryption lookups.
    pub decrypt_map: String,
    /// `{{'P','E'}, ...}` literal listing every pair.
    pub pair_set: String,
}

impl GeneratedKey {
    /// Renders both literals for an existing key.
    #[must_use]
    pub fn from_mapping(mapping: KeyMapping) -> Self {
        let decrypt_map = literal::render_decrypt_map(&mapping);
        let pair_set = literal::render_pair_set(&mapping);
        Self {
            mapping,
            decrypt_map,
            pair_set,
        }
    }
}

/// Generates a key over `alphabet` and renders it.
///
/// With `seed` set the key is reproducible; otherwise every call yields a
/// fresh permutation.
///
/// # Examples
///
/// ```
/// use kitbag_core::keygen::Alphabet;
/// use kitbag_core::keygen::build_key;
///
/// let key = build_key(&Alphabet::default(), None);
/// assert!(key.decrypt_map.starts_with('{'));
/// assert!(key.pair_set.starts_with("{{"));
/// ```
#[must_use]
pub fn build_key(alphabet: &Alphabet, seed: Option<u64>) -> GeneratedKey {
    let mapping = match seed {
        Some(seed) => KeyMapping::seeded(alphabet, seed),
        None => KeyMapping::random(alphabet),
    };
    tracing::debug!(size = mapping.len(), seeded = seed.is_some(), "generated key");
    GeneratedKey::from_mapping(mapping)
}
