//! Lecture content catalog.
//!
//! Read-only reference data built once at startup and passed by shared
//! reference to whatever needs it.

use std::collections::BTreeMap;

/// Label used as catalog key for a week number, e.g. `"Week 3"`.
#[must_use]
pub fn week_label(week: u32) -> String {
    format!("Week {week}")
}

/// Immutable mapping from week label to lecture topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    entries: BTreeMap<String, String>,
}

impl ContentCatalog {
    /// The four-week course shipped with the simulation.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries([
            ("Week 1", "Language and everyday communication"),
            ("Week 2", "Constitution, rights and duties"),
            ("Week 3", "History and culture"),
            ("Week 4", "Living together: work, family and community"),
        ])
    }

    /// Build a catalog from (label, topic) pairs.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Topic for a week label, if the catalog has one.
    #[must_use]
    pub fn topic(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
