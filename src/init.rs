use crate::compat::{BTreeMap, Cow, String, Vec};
use crate::values::Values;

/// Construction input for `QueryParams`, one variant per accepted shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Init<'a> {
    /// No input: an empty collection
    #[default]
    Empty,
    /// A query string, optionally starting with `?`
    Query(Cow<'a, str>),
    /// An ordered sequence of `(name, value)` pairs
    Pairs(Vec<(Cow<'a, str>, Cow<'a, str>)>),
    /// A name to value(s) mapping, in the mapping's own iteration order
    Mapping(Vec<(Cow<'a, str>, Values<'a>)>),
}

impl<'a> From<&'a str> for Init<'a> {
    fn from(query: &'a str) -> Self {
        Self::Query(Cow::Borrowed(query))
    }
}

impl<'a> From<&'a String> for Init<'a> {
    fn from(query: &'a String) -> Self {
        Self::Query(Cow::Borrowed(query.as_str()))
    }
}

impl From<String> for Init<'_> {
    fn from(query: String) -> Self {
        Self::Query(Cow::Owned(query))
    }
}

impl<'a, K, V> From<Vec<(K, V)>> for Init<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Cow<'a, str>>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a, K, V, const N: usize> From<[(K, V); N]> for Init<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Cow<'a, str>>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a, K, V> From<BTreeMap<K, V>> for Init<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Values<'a>>,
{
    fn from(mapping: BTreeMap<K, V>) -> Self {
        Self::Mapping(
            mapping
                .into_iter()
                .map(|(name, values)| (name.into(), values.into()))
                .collect(),
        )
    }
}

#[cfg(feature = "std")]
impl<'a, K, V, S> From<std::collections::HashMap<K, V, S>> for Init<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Values<'a>>,
{
    fn from(mapping: std::collections::HashMap<K, V, S>) -> Self {
        Self::Mapping(
            mapping
                .into_iter()
                .map(|(name, values)| (name.into(), values.into()))
                .collect(),
        )
    }
}

impl<'a, T> From<Option<T>> for Init<'a>
where
    T: Into<Init<'a>>,
{
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Empty, Into::into)
    }
}
