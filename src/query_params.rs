use crate::compat::{BTreeMap, String, ToString, Vec, vec};
use crate::error::Result;
use crate::helpers::{query_pairs, strip_query_prefix};
use crate::init::Init;
use crate::unicode::percent_encode::{decode_component, try_decode_component, write_encoded_component};
use crate::values::Values;

/// An ordered, multi-valued query parameter collection.
///
/// Names keep their first-seen order and each name owns a non-empty list of
/// values in append order. Mutating methods return `&mut Self` so calls chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
    /// Name to position in `entries`; always covers exactly the names in `entries`
    index: BTreeMap<String, usize>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Build from any accepted input shape (query string, pairs, mapping, or nothing).
    pub fn with_init<'a>(init: impl Into<Init<'a>>) -> Self {
        match init.into() {
            Init::Empty => Self::new(),
            Init::Query(query) => Self::parse(&query),
            Init::Pairs(pairs) => Self::from_pairs(pairs),
            Init::Mapping(mapping) => Self::from_mapping(mapping),
        }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Pairs are split on `&`, then on the first `=`. A pair without `=` gets an
    /// empty value. Names and values are decoded (`+` as space, `%XX` escapes).
    pub fn parse(query: &str) -> Self {
        let query = strip_query_prefix(query);
        let mut params = Self::new();

        if query.is_empty() {
            return params;
        }

        for (name, value) in query_pairs(query) {
            params.append(&decode_component(name), Values::single(value));
        }

        #[cfg(feature = "logging")]
        log::trace!(
            "Parsed query string into {} names, {} pairs",
            params.len(),
            params.size()
        );

        params
    }

    /// Parse from a query string, rejecting malformed percent escapes and
    /// escapes that decode to invalid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`](crate::DecodeError) for the first name or value
    /// that cannot be decoded.
    pub fn try_parse(query: &str) -> Result<Self> {
        let query = strip_query_prefix(query);
        let mut params = Self::new();

        for (name, value) in query_pairs(query) {
            let name = try_decode_component(name)?;
            let value = try_decode_component(value)?;
            if name.is_empty() {
                continue;
            }
            params.push_decoded(&name, value);
        }

        Ok(params)
    }

    /// Build from an ordered sequence of `(name, value)` pairs.
    /// Each pair goes through [`append`](Self::append), so pairs with an empty
    /// name or an empty value are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::new();
        params.extend(pairs);
        params
    }

    /// Build from a name to value(s) mapping, appending each entry in the
    /// mapping's iteration order.
    pub fn from_mapping<'a, I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Values<'a>>,
    {
        let mut params = Self::new();
        for (name, values) in mapping {
            params.append(name.as_ref(), values);
        }
        params
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Add a new name with its first values at the end of the name order.
    fn insert_new(&mut self, name: &str, values: Vec<String>) {
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), values));
    }

    /// Remove the entry at `pos` and shift the positions of the names after it.
    fn remove_at(&mut self, pos: usize) {
        let (name, _) = self.entries.remove(pos);
        self.index.remove(&name);
        for (i, (name, _)) in self.entries.iter().enumerate().skip(pos) {
            if let Some(slot) = self.index.get_mut(name.as_str()) {
                *slot = i;
            }
        }
    }

    /// Store an already decoded value at the end of `name`'s list.
    fn push_decoded(&mut self, name: &str, value: String) {
        match self.position(name) {
            Some(pos) => self.entries[pos].1.push(value),
            None => self.insert_new(name, vec![value]),
        }
    }

    /// Append one or more values for `name`.
    ///
    /// Does nothing when `name` is empty or `values` is an empty single value.
    /// Every value is decoded before it is stored: `+` becomes a space, then
    /// `%XX` escapes are decoded. A new name goes to the end of the name order.
    pub fn append<'a>(&mut self, name: &str, values: impl Into<Values<'a>>) -> &mut Self {
        let values = values.into();
        if name.is_empty() || values.is_absent() {
            #[cfg(feature = "logging")]
            log::debug!("Ignoring append with empty name or value (name: {name:?})");
            return self;
        }

        for value in values.iter() {
            self.push_decoded(name, decode_component(value).into_owned());
        }
        self
    }

    /// Delete `name` and all of its values.
    pub fn delete(&mut self, name: &str) -> &mut Self {
        if let Some(pos) = self.position(name) {
            self.remove_at(pos);
        }
        self
    }

    /// Delete the values of `name` equal to `value`.
    /// The name itself goes away once its last value is removed.
    pub fn delete_value(&mut self, name: &str, value: &str) -> &mut Self {
        if let Some(pos) = self.position(name) {
            let values = &mut self.entries[pos].1;
            values.retain(|v| v != value);
            if values.is_empty() {
                self.remove_at(pos);
            }
        }
        self
    }

    /// Get the first value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_values(name)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    /// Get all values for a name, in append order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.get_values(name)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Borrow the stored values of a name.
    pub fn get_values(&self, name: &str) -> Option<&[String]> {
        self.position(name)
            .map(|pos| self.entries[pos].1.as_slice())
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Check for a specific name/value pair.
    pub fn has_value(&self, name: &str, value: &str) -> bool {
        self.get_values(name)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Replace all values of `name` with the string form of `value`.
    ///
    /// The value is stored as given, without decoding. An existing name keeps
    /// its position; a new one goes to the end.
    pub fn set(&mut self, name: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.position(name) {
            Some(pos) => self.entries[pos].1 = vec![value],
            None => self.insert_new(name, vec![value]),
        }
        self
    }

    /// Call `callback(value, name, self)` for every pair, names in first-seen
    /// order and each name's values in append order.
    pub fn for_each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&str, &str, &Self),
    {
        for (name, value) in self {
            callback(value, name, self);
        }
        self
    }

    /// Like [`for_each`](Self::for_each), but a missing callback is a no-op.
    pub fn for_each_opt<F>(&self, callback: Option<F>) -> &Self
    where
        F: FnMut(&str, &str, &Self),
    {
        match callback {
            Some(callback) => self.for_each(callback),
            None => self,
        }
    }

    /// Distinct names in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// All values, in `for_each` order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, value)| value)
    }

    /// All `(name, value)` pairs, in `for_each` order.
    pub fn entries(&self) -> Iter<'_> {
        self.iter()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries.iter(),
            current: None,
        }
    }

    /// Number of `(name, value)` pairs (WHATWG API).
    pub fn size(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort names by code point, then each name's values the same way.
    pub fn sort(&mut self) -> &mut Self {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (i, (name, values)) in self.entries.iter_mut().enumerate() {
            values.sort();
            if let Some(slot) = self.index.get_mut(name.as_str()) {
                *slot = i;
            }
        }
        self
    }

    fn write_query<W: core::fmt::Write>(&self, out: &mut W) -> core::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                out.write_char('&')?;
            }
            write_encoded_component(out, name)?;
            out.write_char('=')?;
            write_encoded_component(out, value)?;
        }
        Ok(())
    }

    /// Convert to query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        // Writing into a String cannot fail
        let _ = self.write_query(&mut result);
        result
    }
}

/// Convert to query string without leading `?`.
/// JavaScript `URLSearchParams.toString()` compatible.
impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_query(f)
    }
}

/// Iterator over `(name, value)` pairs in name-major order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    entries: core::slice::Iter<'a, (String, Vec<String>)>,
    current: Option<(&'a str, core::slice::Iter<'a, String>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((*name, value.as_str()));
                }
            }
            let (name, values) = self.entries.next()?;
            self.current = Some((name.as_str(), values.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let in_current = self.current.as_ref().map_or(0, |(_, values)| values.len());
        let upper = self
            .entries
            .as_slice()
            .iter()
            .try_fold(in_current, |acc, (_, values)| acc.checked_add(values.len()));
        (in_current + self.entries.len(), upper)
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (name, value) in pairs {
            self.append(name.as_ref(), value.as_ref());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl core::str::FromStr for QueryParams {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<'a> From<Init<'a>> for QueryParams {
    fn from(init: Init<'a>) -> Self {
        Self::with_init(init)
    }
}
