//! Text literals for substitution keys.
//!
//! A key is rendered in two forms:
//!
//! - the decrypt map, `{'E':'P', 'E':'P', ...}`, one `encrypted:plain` entry
//!   per alphabet character;
//! - the pair set, `{{'P','E'}, {'P','E'}, ...}`, one `(plain, encrypted)`
//!   group per alphabet character.
//!
//! Characters are single-quoted. Backslash and both quote characters are
//! escaped with a backslash so the output is always well-formed.

use super::mapping::KeyMapping;
use crate::KitError;
use crate::Result;
use tracing::debug;

/// Renders the `encrypted:plain` lookup literal.
///
/// # Examples
///
/// ```
/// use kitbag_core::keygen::KeyMapping;
/// use kitbag_core::keygen::literal::render_decrypt_map;
///
/// let key = KeyMapping::from_pairs([('a', '\''), ('\'', 'a')])?;
/// assert_eq!(render_decrypt_map(&key), r"{'\'':'a', 'a':'\''}");
/// # Ok::<(), kitbag_core::KitError>(())
/// ```
#[must_use]
pub fn render_decrypt_map(key: &KeyMapping) -> String {
    let entries: Vec<String> = key
        .pairs()
        .iter()
        .map(|&(plain, encrypted)| {
            if needs_escape(encrypted) {
                debug!(
                    code_point = %format!("{:#x}", u32::from(encrypted)),
                    "escaping encrypted character"
                );
            }
            format!("{}:{}", quote(encrypted), quote(plain))
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Renders the `(plain, encrypted)` pair-set literal.
///
/// # Examples
///
/// ```
/// use kitbag_core::keygen::KeyMapping;
/// use kitbag_core::keygen::literal::render_pair_set;
///
/// let key = KeyMapping::from_pairs([('a', 'b'), ('b', 'a')])?;
/// assert_eq!(render_pair_set(&key), "{{'a','b'}, {'b','a'}}");
/// # Ok::<(), kitbag_core::KitError>(())
/// ```
#[must_use]
pub fn render_pair_set(key: &KeyMapping) -> String {
    let groups: Vec<String> = key
        .pairs()
        .iter()
        .map(|&(plain, encrypted)| format!("{{{},{}}}", quote(plain), quote(encrypted)))
        .collect();
    format!("{{{}}}", groups.join(", "))
}

/// Parses a decrypt-map literal into `(encrypted, plain)` entries.
///
/// Whitespace between tokens is ignored.
///
/// # Errors
///
/// Returns `KitError::MalformedLiteral` if the text is not a decrypt map.
pub fn parse_decrypt_map(text: &str) -> Result<Vec<(char, char)>> {
    let mut cursor = Cursor::new(text);
    let entries = cursor.braced_list(|c| {
        let key = c.char_literal()?;
        c.expect(':')?;
        let value = c.char_literal()?;
        Ok((key, value))
    })?;
    cursor.finish()?;
    Ok(entries)
}

/// Parses a pair-set literal into `(plain, encrypted)` pairs.
///
/// # Errors
///
/// Returns `KitError::MalformedLiteral` if the text is not a pair set.
pub fn parse_pair_set(text: &str) -> Result<Vec<(char, char)>> {
    let mut cursor = Cursor::new(text);
    let pairs = cursor.braced_list(|c| {
        c.expect('{')?;
        let plain = c.char_literal()?;
        c.expect(',')?;
        let encrypted = c.char_literal()?;
        c.expect('}')?;
        Ok((plain, encrypted))
    })?;
    cursor.finish()?;
    Ok(pairs)
}

/// Rebuilds a key from a decrypt-map literal.
///
/// # Errors
///
/// Fails if the literal is malformed or does not describe a bijection.
pub fn key_from_decrypt_map(text: &str) -> Result<KeyMapping> {
    let entries = parse_decrypt_map(text)?;
    KeyMapping::from_pairs(entries.into_iter().map(|(e, p)| (p, e)))
}

fn needs_escape(c: char) -> bool {
    matches!(c, '\\' | '\'' | '"')
}

fn quote(c: char) -> String {
    if needs_escape(c) {
        format!("'\\{c}'")
    } else {
        format!("'{c}'")
    }
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> KitError {
        KitError::MalformedLiteral {
            offset: self.pos,
            reason: reason.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == want => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{want}', found '{c}'"))),
            None => Err(self.error(format!("expected '{want}', found end of input"))),
        }
    }

    fn char_literal(&mut self) -> Result<char> {
        self.expect('\'')?;
        let c = match self.bump() {
            Some('\\') => self
                .bump()
                .ok_or_else(|| self.error("unterminated escape"))?,
            Some('\'') => return Err(self.error("empty character literal")),
            Some(c) => c,
            None => return Err(self.error("unterminated character literal")),
        };
        match self.bump() {
            Some('\'') => Ok(c),
            _ => Err(self.error("character literal must hold exactly one character")),
        }
    }

    fn braced_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect('{')?;
        let mut items = Vec::new();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(c) => return Err(self.error(format!("expected ',' or '}}', found '{c}'"))),
                None => return Err(self.error("unterminated list")),
            }
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(format!("trailing input starting with '{c}'"))),
        }
    }
}
