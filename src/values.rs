use crate::compat::{Cow, String, Vec};

/// The value argument of `QueryParams::append`: one value or a sequence of values.
///
/// `One("")` is treated as an absent value and makes `append` a no-op, while
/// `Many(vec![""])` stores an empty value and `Many(vec![])` stores nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Values<'a> {
    One(Cow<'a, str>),
    Many(Vec<Cow<'a, str>>),
}

impl<'a> Values<'a> {
    /// Wrap a single value as a one-element sequence, so an empty value is kept
    pub fn single(value: impl Into<Cow<'a, str>>) -> Self {
        Self::Many(crate::compat::vec![value.into()])
    }

    /// An empty single value, rejected by `append`
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::One(value) if value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[Cow<'a, str>] = match self {
            Self::One(value) => core::slice::from_ref(value),
            Self::Many(values) => values,
        };
        values.iter().map(|value| &**value)
    }
}

impl<'a> From<&'a str> for Values<'a> {
    fn from(value: &'a str) -> Self {
        Self::One(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Values<'a> {
    fn from(value: &'a String) -> Self {
        Self::One(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Values<'_> {
    fn from(value: String) -> Self {
        Self::One(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Values<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::One(value)
    }
}

impl<'a> From<Vec<&'a str>> for Values<'a> {
    fn from(values: Vec<&'a str>) -> Self {
        Self::Many(values.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for Values<'_> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values.into_iter().map(Cow::Owned).collect())
    }
}

impl<'a> From<&[&'a str]> for Values<'a> {
    fn from(values: &[&'a str]) -> Self {
        Self::Many(values.iter().copied().map(Cow::Borrowed).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Values<'a> {
    fn from(values: [&'a str; N]) -> Self {
        Self::Many(values.into_iter().map(Cow::Borrowed).collect())
    }
}
