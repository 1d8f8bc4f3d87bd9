use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single drawable in the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// Inner markup of the source image, without the root element
    pub content: String,

    /// Display width
    pub width: u32,

    /// Display height
    pub height: u32,
}

/// The persisted icon pack document.
///
/// Icons are kept in a sorted map so the serialized document is stable
/// across runs regardless of filesystem enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPack {
    /// Namespace used by consumers to qualify references (`<prefix>-<id>`)
    pub prefix: String,

    /// Icons keyed by identifier
    pub icons: BTreeMap<String, IconEntry>,
}

impl IconPack {
    /// Creates an empty pack with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            icons: BTreeMap::new(),
        }
    }

    /// Inserts an icon, returning the entry it replaced.
    pub fn insert(&mut self, id: impl Into<String>, entry: IconEntry) -> Option<IconEntry> {
        self.icons.insert(id.into(), entry)
    }

    /// Returns the number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if the pack holds no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns the fully qualified reference for an identifier.
    #[must_use]
    pub fn reference(&self, id: &str) -> String {
        format!("{}-{}", self.prefix, id)
    }

    /// Groups identifiers by their first hyphen-delimited segment.
    ///
    /// This is the grouping the browsing sidebar applies: the first segment is
    /// the category label and the remainder the icon label. Identifiers with a
    /// single segment are their own category with an empty label.
    #[must_use]
    pub fn categories(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for id in self.icons.keys() {
            let (category, label) = id.split_once('-').unwrap_or((id.as_str(), ""));
            groups.entry(category).or_default().push(label);
        }
        groups
    }

    /// Serializes the pack as JSON indented by `indent` spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
