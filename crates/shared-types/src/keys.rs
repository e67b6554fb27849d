//! # Composite Key Space
//!
//! Derives structured, collision-free ledger keys from an index namespace
//! plus ordered component strings.
//!
//! ## Encoding
//!
//! ```text
//! U+0000 index U+0000 component_1 U+0000 ... component_n U+0000
//! ```
//!
//! Every component is terminated by `U+0000` and no component may contain
//! `U+0000`, so two distinct `(index, components)` pairs never encode to
//! the same key. Simple keys (such as the settings key) never start with
//! `U+0000`, so they cannot collide with composite keys either.
//!
//! ## Range Enumeration
//!
//! A partial key (index plus leading components) is a strict prefix of
//! every full key extending it. All such keys sort inside
//! `[partial, partial + U+10FFFF)`, which is why `U+10FFFF` is reserved
//! and rejected inside components.

use crate::errors::KeyError;
use std::fmt;

/// Delimiter placed before the index and after every component.
pub const MIN_UNICODE_RUNE: char = '\u{0000}';

/// Upper bound of a prefix range. Reserved, never valid inside a key.
pub const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// A key derived from an index namespace and ordered components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey(String);

impl CompositeKey {
    /// Build a composite key.
    ///
    /// Fails if the index is empty or if the index or any component
    /// contains a reserved rune.
    pub fn new<S: AsRef<str>>(index: &str, components: &[S]) -> Result<Self, KeyError> {
        if index.is_empty() {
            return Err(KeyError::EmptyIndex);
        }
        validate_component(index)?;

        let capacity = 2 + index.len() + components.iter().map(|c| c.as_ref().len() + 1).sum::<usize>();
        let mut key = String::with_capacity(capacity);
        key.push(MIN_UNICODE_RUNE);
        key.push_str(index);
        key.push(MIN_UNICODE_RUNE);
        for component in components {
            let component = component.as_ref();
            validate_component(component)?;
            key.push_str(component);
            key.push(MIN_UNICODE_RUNE);
        }
        Ok(Self(key))
    }

    /// Build the partial key used as the lower bound of a prefix scan.
    ///
    /// Identical to [`CompositeKey::new`]; the separate name documents
    /// intent at call sites that enumerate a range.
    pub fn partial<S: AsRef<str>>(index: &str, components: &[S]) -> Result<Self, KeyError> {
        Self::new(index, components)
    }

    /// Exclusive upper bound of the range of keys extending this one.
    pub fn range_end(&self) -> String {
        let mut end = self.0.clone();
        end.push(MAX_UNICODE_RUNE);
        end
    }

    /// Returns true if `key` extends this (partial) key.
    pub fn is_prefix_of(&self, key: &str) -> bool {
        key.starts_with(self.0.as_str())
    }

    /// Recover `(index, components)` from an encoded key.
    pub fn split(key: &str) -> Result<(String, Vec<String>), KeyError> {
        let body = key
            .strip_prefix(MIN_UNICODE_RUNE)
            .ok_or_else(|| KeyError::NotComposite(key.to_string()))?;
        let mut parts = body.split(MIN_UNICODE_RUNE);
        let index = parts
            .next()
            .filter(|index| !index.is_empty())
            .ok_or_else(|| KeyError::NotComposite(key.to_string()))?
            .to_string();

        let mut components: Vec<String> = parts.map(str::to_string).collect();
        // The trailing delimiter leaves one empty segment behind.
        match components.pop() {
            Some(last) if last.is_empty() => Ok((index, components)),
            _ => Err(KeyError::NotComposite(key.to_string())),
        }
    }

    /// The encoded key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render delimiters visibly; the raw key is not printable.
        write!(f, "{}", self.0.replace(MIN_UNICODE_RUNE, "/"))
    }
}

impl AsRef<str> for CompositeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CompositeKey> for String {
    fn from(key: CompositeKey) -> Self {
        key.0
    }
}

fn validate_component(component: &str) -> Result<(), KeyError> {
    match component
        .chars()
        .find(|c| *c == MIN_UNICODE_RUNE || *c == MAX_UNICODE_RUNE)
    {
        Some(rune) => Err(KeyError::InvalidComponent {
            component: component.to_string(),
            rune: rune as u32,
        }),
        None => Ok(()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
