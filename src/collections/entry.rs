use derive_more::IsVariant;

/// A single name/value pair, as stored in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<V> {
    pub name: String,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(name: impl Into<String>, value: V) -> Entry<V> {
        Entry {
            name: name.into(),
            value,
        }
    }

    pub fn into_parts(self) -> (String, V) {
        (self.name, self.value)
    }
}

impl<V> From<(String, V)> for Entry<V> {
    fn from((name, value): (String, V)) -> Self {
        Entry { name, value }
    }
}

/// The outcome of adding a name/value pair to a collection.
///
/// When the name already existed, the collection keeps its position and hands the previous value
/// back, leaving it to the caller to decide what happens to it.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Added<V> {
    /// A new entry was appended.
    Inserted,
    /// An existing entry had its value replaced by the new one.
    Replaced(V),
}

impl<V> Added<V> {
    /// Returns the previous value, if there was one.
    pub fn replaced(self) -> Option<V> {
        match self {
            Added::Inserted => None,
            Added::Replaced(previous) => Some(previous),
        }
    }
}
