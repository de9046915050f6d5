//! Caller-supplied query parameters.
//!
//! The agent sends parameters as an ordered list of name/value pairs. They are
//! folded into a mapping where the first occurrence of a name fixes its
//! position and later duplicates overwrite its value.

/// Ordered query mapping with last-wins semantics on duplicate names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
  pairs: Vec<(String, String)>,
}

impl QueryParams {
  /// Create an empty mapping
  pub fn new() -> Self {
    Self::default()
  }

  /// Fold ordered pairs into a mapping
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let mut params = Self::new();
    for (name, value) in pairs {
      params.insert(name, value);
    }
    params
  }

  /// Insert a pair, overwriting the value of an existing name in place
  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
    let name = name.into();
    let value = value.into();
    match self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
      Some((_, slot)) => *slot = value,
      None => self.pairs.push((name, value)),
    }
  }

  /// Value currently mapped to `name`
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .pairs
      .iter()
      .find(|(existing, _)| existing == name)
      .map(|(_, value)| value.as_str())
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  /// Names in query order
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.pairs.iter().map(|(name, _)| name.as_str())
  }

  pub(crate) fn as_pairs(&self) -> &[(String, String)] {
    &self.pairs
  }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
  K: Into<String>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self::from_pairs(iter)
  }
}
