//! Ordered attribute map.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Scalar;

/// Attributes of an element, kept in declaration order.
///
/// The order attributes are set is the order they render in. Setting a key
/// that already exists updates its value without moving it.
///
/// # Examples
///
/// ```
/// use sprig_tree::Attrs;
///
/// let attrs = Attrs::new().set("type", "xml").set("use", "example");
/// let keys: Vec<&str> = attrs.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["type", "use"]);
/// ```
///
/// When every value has the same type, an array literal is shorter:
///
/// ```
/// use sprig_tree::attrs;
///
/// let link = attrs([("href", "/styles.css"), ("rel", "stylesheet")]);
/// assert_eq!(link.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attrs {
    entries: IndexMap<String, Scalar>,
}

impl Attrs {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. New keys go to the end; existing keys keep their
    /// position and get the new value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries.get(key)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
    K: Into<String>,
    V: Into<Scalar>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Build an [`Attrs`] from an array of key/value pairs.
///
/// Shorthand for [`Attrs::from`] at call sites that declare attributes
/// inline. Mixed value types need [`Attrs::set`] chaining instead.
pub fn attrs<K, V, const N: usize>(pairs: [(K, V); N]) -> Attrs
where
    K: Into<String>,
    V: Into<Scalar>,
{
    Attrs::from(pairs)
}
